//! Maps numeric indices (UV index, AQI, moon phase fraction) to discrete
//! display categories.
//!
//! All functions are total: out-of-range input falls into the nearest bucket
//! or into [`UNKNOWN_AQI`], never an error.

use crate::types::reports::AirComponents;
use serde::Serialize;
use std::fmt;

/// A display category: a level name, the color class used to render it, and advice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub level: &'static str,
    pub color_class: &'static str,
    pub advice: &'static str,
}

impl Bucket {
    const fn new(level: &'static str, color_class: &'static str, advice: &'static str) -> Self {
        Self {
            level,
            color_class,
            advice,
        }
    }
}

const UV_LOW: Bucket = Bucket::new("Low", "bg-green-200", "Safe for most activities.");
const UV_MODERATE: Bucket = Bucket::new(
    "Moderate",
    "bg-yellow-200",
    "Wear sunglasses and sunscreen.",
);
const UV_HIGH: Bucket = Bucket::new(
    "High",
    "bg-orange-200",
    "Reduce time in the sun between 10 a.m. and 4 p.m.",
);
const UV_VERY_HIGH: Bucket = Bucket::new(
    "Very High",
    "bg-red-200",
    "Minimize sun exposure, wear protective clothing.",
);
const UV_EXTREME: Bucket = Bucket::new(
    "Extreme",
    "bg-purple-200",
    "Avoid being outside during midday hours.",
);

/// Returned by [`classify_aqi`] for anything outside 1..=5.
pub const UNKNOWN_AQI: Bucket = Bucket::new("Unknown", "bg-gray-200", "No data.");

const AQI_BUCKETS: [Bucket; 5] = [
    Bucket::new("Good", "bg-green-200", "Air quality is satisfactory."),
    Bucket::new("Fair", "bg-yellow-200", "Air quality is acceptable."),
    Bucket::new(
        "Moderate",
        "bg-orange-200",
        "Sensitive groups should limit outdoor exertion.",
    ),
    Bucket::new("Poor", "bg-red-200", "Limit prolonged outdoor exertion."),
    Bucket::new("Very Poor", "bg-purple-200", "Avoid outdoor activities."),
];

/// Classifies a UV index.
///
/// Thresholds: `< 3` Low, `< 6` Moderate, `< 8` High, `< 11` Very High,
/// anything else Extreme. Negative values land in Low.
///
/// # Examples
///
/// ```
/// use mausam::classify_uv;
///
/// assert_eq!(classify_uv(2.9).level, "Low");
/// assert_eq!(classify_uv(3.0).level, "Moderate");
/// assert_eq!(classify_uv(11.0).level, "Extreme");
/// ```
pub fn classify_uv(uv_index: f64) -> Bucket {
    if uv_index < 3.0 {
        UV_LOW
    } else if uv_index < 6.0 {
        UV_MODERATE
    } else if uv_index < 8.0 {
        UV_HIGH
    } else if uv_index < 11.0 {
        UV_VERY_HIGH
    } else {
        UV_EXTREME
    }
}

/// Classifies an air quality index on the provider's 1-5 scale.
///
/// Only exact values 1..=5 map to a level; everything else is [`UNKNOWN_AQI`].
pub fn classify_aqi(aqi: i64) -> Bucket {
    match aqi {
        1..=5 => AQI_BUCKETS[(aqi - 1) as usize],
        _ => UNKNOWN_AQI,
    }
}

/// The eight named lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MoonPhase {
    NewMoon,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    FullMoon,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

impl MoonPhase {
    /// Converts the provider's lunation fraction (0 and 1 are new moon, 0.5 full moon).
    ///
    /// The quarter phases are only reported at their exact fractions; values
    /// in between belong to the crescent/gibbous phases.
    pub fn from_fraction(phase: f64) -> Self {
        if phase == 0.0 || phase == 1.0 {
            MoonPhase::NewMoon
        } else if phase < 0.25 {
            MoonPhase::WaxingCrescent
        } else if phase == 0.25 {
            MoonPhase::FirstQuarter
        } else if phase < 0.5 {
            MoonPhase::WaxingGibbous
        } else if phase == 0.5 {
            MoonPhase::FullMoon
        } else if phase < 0.75 {
            MoonPhase::WaningGibbous
        } else if phase == 0.75 {
            MoonPhase::LastQuarter
        } else {
            MoonPhase::WaningCrescent
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::NewMoon => "New Moon",
            MoonPhase::WaxingCrescent => "Waxing Crescent",
            MoonPhase::FirstQuarter => "First Quarter",
            MoonPhase::WaxingGibbous => "Waxing Gibbous",
            MoonPhase::FullMoon => "Full Moon",
            MoonPhase::WaningGibbous => "Waning Gibbous",
            MoonPhase::LastQuarter => "Last Quarter",
            MoonPhase::WaningCrescent => "Waning Crescent",
        }
    }
}

impl fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Pollutants shown on the air quality panel, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Pollutant {
    Pm2_5,
    Pm10,
    No2,
    O3,
}

impl Pollutant {
    pub const ALL: [Pollutant; 4] = [Pollutant::Pm2_5, Pollutant::Pm10, Pollutant::No2, Pollutant::O3];

    pub fn label(&self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "PM 2.5",
            Pollutant::Pm10 => "PM 10",
            Pollutant::No2 => "NO₂",
            Pollutant::O3 => "O₃",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Pollutant::Pm2_5 => "Fine Particulate Matter – Health Impact",
            Pollutant::Pm10 => "Irritation Risk",
            Pollutant::No2 => "Respiratory Effect",
            Pollutant::O3 => "Ozone Level",
        }
    }

    /// Concentration in µg/m³, if the provider reported it.
    pub fn value(&self, components: &AirComponents) -> Option<f64> {
        match self {
            Pollutant::Pm2_5 => components.pm2_5,
            Pollutant::Pm10 => components.pm10,
            Pollutant::No2 => components.no2,
            Pollutant::O3 => components.o3,
        }
    }
}
