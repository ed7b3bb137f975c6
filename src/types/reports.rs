//! Typed records returned by the provider adapters and the [`crate::Mausam`] client.

use crate::advisory::ActivitySuggestion;
use crate::classify::{Bucket, MoonPhase};
use crate::geo::StationMismatch;
use crate::types::coordinate::Coordinate;
use crate::types::weather_condition::WeatherCondition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current conditions at the provider's nearest station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Name of the station/place the provider answered for.
    pub station_name: String,
    pub station_country: Option<String>,
    pub station_coordinate: Coordinate,
    pub temp_c: f64,
    pub feels_like_c: Option<f64>,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    pub humidity_pct: f64,
    /// Sea-level pressure in hPa.
    pub pressure_hpa: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    pub condition_code: String,
    pub description: String,
    pub icon_code: String,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub observed_at: DateTime<Utc>,
}

impl CurrentWeather {
    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_main(&self.condition_code)
    }
}

/// Pollutant concentrations in µg/m³.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AirComponents {
    #[serde(default)]
    pub co: Option<f64>,
    #[serde(default)]
    pub no: Option<f64>,
    #[serde(default)]
    pub no2: Option<f64>,
    #[serde(default)]
    pub o3: Option<f64>,
    #[serde(default)]
    pub so2: Option<f64>,
    #[serde(default)]
    pub pm2_5: Option<f64>,
    #[serde(default)]
    pub pm10: Option<f64>,
    #[serde(default)]
    pub nh3: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirQualityReport {
    /// 1 (Good) to 5 (Very Poor).
    pub aqi: i64,
    pub pollutants: AirComponents,
    pub measured_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MinutePrecipitation {
    pub timestamp: i64,
    /// Precipitation intensity in mm/h.
    pub precipitation_mm: f64,
}

/// Precipitation for the next hour, minute by minute.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MinuteCast {
    pub minutes: Vec<MinutePrecipitation>,
}

impl MinuteCast {
    pub fn has_precipitation(&self) -> bool {
        self.minutes.iter().any(|m| m.precipitation_mm > 0.0)
    }

    /// Row label for the minute at `index`: `"Now"`, then `"+1 min"`, `"+2 min"`, ...
    pub fn minute_label(index: usize) -> String {
        if index == 0 {
            "Now".to_string()
        } else {
            format!("+{} min", index)
        }
    }
}

/// Sunrise, sunset and moon phase for the current day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkyReport {
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub moon_phase: Option<MoonPhase>,
}

/// Current weather for a selected location, with a note when the provider
/// answered for a different station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentReport {
    pub weather: CurrentWeather,
    pub mismatch: Option<StationMismatch>,
}

/// UV and air quality buckets plus the activity suggestion derived from both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthReport {
    pub uv_index: Option<f64>,
    pub uv: Option<Bucket>,
    pub aqi: Option<i64>,
    pub air: Option<Bucket>,
    /// Only present when both UV index and AQI are known.
    pub suggestion: Option<ActivitySuggestion>,
}

/// Weather and an AI-written summary for an Indian state's capital.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StateBulletin {
    pub state: String,
    pub capital: &'static str,
    pub weather: CurrentWeather,
    pub summary: String,
}
