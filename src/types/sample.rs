//! Forecast records: raw provider samples and the rows derived from them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One raw 3-hourly forecast sample, already converted from the provider's JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleInterval {
    /// Start of the interval, seconds since the Unix epoch.
    pub timestamp: i64,
    pub temp_c: f64,
    pub temp_min_c: f64,
    pub temp_max_c: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    /// Rain volume for the interval in mm, if the provider reported any.
    #[serde(default)]
    pub precipitation_mm: Option<f64>,
    /// Condition group name, e.g. `"Rain"`.
    pub condition_code: String,
    /// Human readable description, e.g. `"light rain"`.
    pub condition_description: String,
    /// Provider icon id, e.g. `"10d"`.
    pub icon_code: String,
}

/// Per-calendar-day rollup of [`SampleInterval`]s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    /// Short weekday name of `date` (`"Mon"`).
    pub label: String,
    pub min_temp_c: f64,
    pub max_temp_c: f64,
    pub total_precipitation_mm: f64,
    pub max_wind_speed: f64,
    pub icon_code: String,
    pub condition_code: String,
    pub description: String,
}

/// A row of the 24-hour view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyPoint {
    pub timestamp: i64,
    /// Local wall-clock time, `"HH:MM"`.
    pub time_label: String,
    pub temp_c: f64,
    pub wind_speed: f64,
    pub rain_mm: f64,
}
