//! Weather forecast entity
//!
//! The `current` block of an Open-Meteo forecast response.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Open-Meteo sends local time at minute precision, without an offset
pub const OPEN_METEO_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    pub current: CurrentWeather,
    #[serde(default)]
    pub current_units: Option<CurrentUnits>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub temperature_2m: f64,
    /// 1 during daylight, 0 at night
    #[serde(default)]
    pub is_day: Option<u8>,
    #[serde(default)]
    pub time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUnits {
    #[serde(default)]
    pub temperature_2m: Option<String>,
}

impl Forecast {
    pub fn temperature_unit(&self) -> &str {
        self.current_units
            .as_ref()
            .and_then(|u| u.temperature_2m.as_deref())
            .unwrap_or("°C")
    }
}

impl CurrentWeather {
    pub fn is_daytime(&self) -> Option<bool> {
        self.is_day.map(|d| d != 0)
    }

    /// Observation time, if present and well-formed
    pub fn observed_at(&self) -> Option<NaiveDateTime> {
        self.time
            .as_deref()
            .and_then(|t| NaiveDateTime::parse_from_str(t, OPEN_METEO_TIME_FORMAT).ok())
    }
}
