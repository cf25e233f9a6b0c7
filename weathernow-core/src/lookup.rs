//! City lookup workflow: geocode once, then fetch forecast and current
//! weather concurrently, and merge into one `CityWeather`.

use futures::future::join_all;

use crate::client::WeatherApi;
use crate::error::LookupError;
use crate::model::CityWeather;

/// Cities shown on the startup panel when the config does not override them.
pub const DEFAULT_CITIES: &[&str] = &["Delhi", "New York", "Mumbai", "Kolkata"];

/// Look up combined weather for one city.
///
/// The two weather fetches have no data dependency on each other and run
/// concurrently once coordinates are known. Both are driven to completion;
/// if either fails, the whole lookup fails and no partial result escapes.
pub async fn lookup_city(api: &dyn WeatherApi, name: &str) -> Result<CityWeather, LookupError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(LookupError::InvalidInput);
    }

    let coords = api.resolve(name).await?;
    tracing::debug!(city = name, lat = coords.latitude, lon = coords.longitude, "resolved");

    let (forecast, current) = tokio::join!(api.fetch_forecast(coords), api.fetch_current(coords));

    Ok(CityWeather {
        name: name.to_string(),
        forecast: forecast?,
        current: current?,
    })
}

/// Run the lookup workflow concurrently over a fixed city list.
///
/// Results come back in input order, not completion order. A city whose
/// lookup fails is logged and skipped; the rest of the panel still loads.
pub async fn load_default_cities(api: &dyn WeatherApi, cities: &[String]) -> Vec<CityWeather> {
    let lookups = cities.iter().map(|city| lookup_city(api, city));

    join_all(lookups)
        .await
        .into_iter()
        .zip(cities)
        .filter_map(|(result, city)| match result {
            Ok(weather) => Some(weather),
            Err(err) => {
                tracing::warn!(city = city.as_str(), error = %err, "skipping city");
                None
            }
        })
        .collect()
}
