use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Geographic position of a resolved city.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Daily aggregates as returned by the forecast endpoint: parallel columns
/// aligned by day index. Column 0 is today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<NaiveDate>,
    pub temperature_2m_max: Vec<f64>,
    pub temperature_2m_min: Vec<f64>,
    pub precipitation_sum: Vec<f64>,
    pub windspeed_10m_max: Vec<f64>,
}

impl DailyForecast {
    /// Number of days all columns agree on, or `None` if the columns are
    /// misaligned.
    pub fn len(&self) -> Option<usize> {
        let n = self.time.len();
        (self.temperature_2m_max.len() == n
            && self.temperature_2m_min.len() == n
            && self.precipitation_sum.len() == n
            && self.windspeed_10m_max.len() == n)
            .then_some(n)
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Materialize the day at `index` as a single row.
    pub fn day(&self, index: usize) -> Option<DayForecast> {
        Some(DayForecast {
            date: *self.time.get(index)?,
            temperature_max: *self.temperature_2m_max.get(index)?,
            temperature_min: *self.temperature_2m_min.get(index)?,
            precipitation_sum: *self.precipitation_sum.get(index)?,
            windspeed_max: *self.windspeed_10m_max.get(index)?,
        })
    }

    /// Today's row. Always `Some` for a forecast obtained from a successful
    /// lookup; the client rejects empty or misaligned responses.
    pub fn today(&self) -> Option<DayForecast> {
        self.day(0)
    }
}

/// One day of the forecast, flattened out of the column layout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayForecast {
    pub date: NaiveDate,
    pub temperature_max: f64,
    pub temperature_min: f64,
    pub precipitation_sum: f64,
    pub windspeed_max: f64,
}

/// Point-in-time observation from the `current_weather` block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentObservation {
    pub temperature: f64,
    pub windspeed: f64,
    pub winddirection: f64,
    pub weathercode: i32,
    /// Local time of the observation, as reported by the provider.
    #[serde(default)]
    pub time: String,
}

/// Combined result of one city lookup. Only constructed once geocoding,
/// forecast and current-weather fetches have all succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityWeather {
    pub name: String,
    pub forecast: DailyForecast,
    pub current: CurrentObservation,
}
