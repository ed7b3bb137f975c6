use crate::types::weather_condition::WeatherCondition;
use serde::{Deserialize, Serialize};

/// Instantaneous values that advisory rules are evaluated against.
///
/// UV index, AQI and pollen come from separate requests and may be missing;
/// rules that read a missing field never match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionSnapshot {
    pub temp_c: f64,
    pub humidity_pct: f64,
    /// Wind speed in m/s.
    pub wind_speed: f64,
    pub uv_index: Option<f64>,
    /// Air quality index on the provider's 1-5 scale.
    pub aqi: Option<i64>,
    /// Condition group name, e.g. `"Thunderstorm"`.
    pub condition_code: String,
    pub pollen_index: Option<f64>,
}

impl ConditionSnapshot {
    /// Snapshot with only the always-present fields set.
    pub fn new(
        temp_c: f64,
        humidity_pct: f64,
        wind_speed: f64,
        condition_code: impl Into<String>,
    ) -> Self {
        Self {
            temp_c,
            humidity_pct,
            wind_speed,
            uv_index: None,
            aqi: None,
            condition_code: condition_code.into(),
            pollen_index: None,
        }
    }

    pub fn with_uv_index(mut self, uv_index: Option<f64>) -> Self {
        self.uv_index = uv_index;
        self
    }

    pub fn with_aqi(mut self, aqi: Option<i64>) -> Self {
        self.aqi = aqi;
        self
    }

    pub fn with_pollen_index(mut self, pollen_index: Option<f64>) -> Self {
        self.pollen_index = pollen_index;
        self
    }

    /// Parsed condition group, `None` when the code is not a known group.
    pub fn condition(&self) -> Option<WeatherCondition> {
        WeatherCondition::from_main(&self.condition_code)
    }

    pub(crate) fn condition_is(&self, condition: WeatherCondition) -> bool {
        self.condition() == Some(condition)
    }
}
