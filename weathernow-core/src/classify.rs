//! Mapping from WMO weather codes to display categories.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// Display category for a WMO weather code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconCategory {
    Clear,
    PartlyCloudy,
    Overcast,
    Fog,
    Drizzle,
    Rain,
    Snow,
    RainShowers,
    SnowShowers,
    Thunderstorm,
    #[default]
    Unknown,
}

impl IconCategory {
    /// Classify a WMO weather code. Total over all integers; codes outside
    /// the documented ranges map to `Unknown`.
    pub fn from_code(code: i32) -> Self {
        match code {
            0..=1 => Self::Clear,
            2 => Self::PartlyCloudy,
            3 => Self::Overcast,
            45..=48 => Self::Fog,
            51..=57 => Self::Drizzle,
            61..=67 => Self::Rain,
            71..=77 => Self::Snow,
            80..=82 => Self::RainShowers,
            85..=86 => Self::SnowShowers,
            95..=99 => Self::Thunderstorm,
            _ => Self::Unknown,
        }
    }

    /// Display symbol for the category.
    pub fn icon(&self) -> &'static str {
        match self {
            Self::Clear => "☀️",
            Self::PartlyCloudy => "⛅",
            Self::Overcast => "☁️",
            Self::Fog => "🌫️",
            Self::Drizzle => "🌦️",
            Self::Rain => "🌧️",
            Self::Snow => "❄️",
            Self::RainShowers => "🌧️",
            Self::SnowShowers => "🌨️",
            Self::Thunderstorm => "⛈️",
            Self::Unknown => "❓",
        }
    }

    /// Human-readable name for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Overcast => "Overcast",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::RainShowers => "Rain Showers",
            Self::SnowShowers => "Snow Showers",
            Self::Thunderstorm => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_codes() {
        assert_eq!(IconCategory::from_code(0), IconCategory::Clear);
        assert_eq!(IconCategory::from_code(1), IconCategory::Clear);
    }

    #[test]
    fn cloud_codes() {
        assert_eq!(IconCategory::from_code(2), IconCategory::PartlyCloudy);
        assert_eq!(IconCategory::from_code(3), IconCategory::Overcast);
    }

    #[test]
    fn fog_codes() {
        for code in 45..=48 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Fog);
        }
    }

    #[test]
    fn precipitation_codes() {
        for code in 51..=57 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Drizzle);
        }
        for code in 61..=67 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Rain);
        }
        for code in 71..=77 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Snow);
        }
        for code in 80..=82 {
            assert_eq!(IconCategory::from_code(code), IconCategory::RainShowers);
        }
        for code in 85..=86 {
            assert_eq!(IconCategory::from_code(code), IconCategory::SnowShowers);
        }
        for code in 95..=99 {
            assert_eq!(IconCategory::from_code(code), IconCategory::Thunderstorm);
        }
    }

    #[test]
    fn gaps_are_unknown() {
        let gaps: Vec<i32> = (4..=44)
            .chain(49..=50)
            .chain(58..=60)
            .chain(68..=70)
            .chain(78..=79)
            .chain(83..=84)
            .chain(87..=94)
            .collect();
        for code in gaps {
            assert_eq!(IconCategory::from_code(code), IconCategory::Unknown, "code {code}");
        }
    }

    #[test]
    fn total_over_valid_code_range() {
        // Every code in 0..=99 gets exactly one category; out-of-range codes
        // fall back to Unknown.
        for code in 0..=99 {
            let _ = IconCategory::from_code(code);
        }
        assert_eq!(IconCategory::from_code(-1), IconCategory::Unknown);
        assert_eq!(IconCategory::from_code(100), IconCategory::Unknown);
    }

    #[test]
    fn icon_and_label() {
        assert_eq!(IconCategory::Clear.icon(), "☀️");
        assert_eq!(IconCategory::Clear.label(), "Clear");
        assert_eq!(IconCategory::Thunderstorm.icon(), "⛈️");
    }
}
