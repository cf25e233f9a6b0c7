//! Plain-text rendering of lookup results. Pure string builders so the
//! output contract stays testable.

use std::fmt::Write;

use weathernow_core::{CityWeather, CurrentObservation, DayForecast, IconCategory};

/// `{icon} {temperature}°C`, e.g. `☀️ 18.5°C`.
pub fn current_line(current: &CurrentObservation) -> String {
    let icon = IconCategory::from_code(current.weathercode).icon();
    format!("{icon} {:.1}°C", current.temperature)
}

fn forecast_lines(out: &mut String, today: &DayForecast) {
    let _ = writeln!(out, "Max: {:.1}°C", today.temperature_max);
    let _ = writeln!(out, "Min: {:.1}°C", today.temperature_min);
    let _ = writeln!(out, "Precipitation: {:.1} mm", today.precipitation_sum);
    let _ = writeln!(out, "Max Wind Speed: {:.1} km/h", today.windspeed_max);
}

/// Full card for a searched city.
pub fn city_details(weather: &CityWeather) -> String {
    let category = IconCategory::from_code(weather.current.weathercode);

    let mut out = String::new();
    let _ = writeln!(out, "Weather in {}", weather.name);
    let _ = writeln!(out, "{}", current_line(&weather.current));
    let _ = writeln!(out, "Condition: {}", category.label());
    let _ = writeln!(out, "Wind Speed: {:.1} km/h", weather.current.windspeed);
    let _ = writeln!(out, "Wind Direction: {:.0}°", weather.current.winddirection);

    if let Some(today) = weather.forecast.today() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Today's Forecast ({})", today.date);
        forecast_lines(&mut out, &today);
    }

    out
}

/// Compact card used on the popular-cities panel.
pub fn city_card(weather: &CityWeather) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", weather.name);
    let _ = writeln!(out, "{}", current_line(&weather.current));

    if let Some(today) = weather.forecast.today() {
        forecast_lines(&mut out, &today);
    }

    out
}

pub fn print_panel(cities: &[CityWeather]) {
    if cities.is_empty() {
        println!("No city data available.");
        return;
    }

    println!("Popular Cities");
    for weather in cities {
        println!();
        print!("{}", city_card(weather));
    }
    println!();
}
