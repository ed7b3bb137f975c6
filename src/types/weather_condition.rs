//! Defines the `WeatherCondition` enum, mapping the provider's condition groups
//! (the `weather[0].main` field) and numeric condition ids to variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A weather condition group as reported by OpenWeatherMap.
///
/// Every condition the provider reports belongs to one group. The group name
/// is what the provider sends in `weather[0].main`; the numeric condition id
/// (`weather[0].id`) encodes the same group in its hundreds digit. See the
/// [provider documentation](https://openweathermap.org/weather-conditions).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum WeatherCondition {
    /// Ids 200-232.
    Thunderstorm,
    /// Ids 300-321.
    Drizzle,
    /// Ids 500-531.
    Rain,
    /// Ids 600-622.
    Snow,
    /// Id 701.
    Mist,
    /// Id 711.
    Smoke,
    /// Id 721.
    Haze,
    /// Ids 731 and 761 (sand/dust whirls, dust).
    Dust,
    /// Id 741.
    Fog,
    /// Id 751.
    Sand,
    /// Id 762: volcanic ash.
    Ash,
    /// Id 771.
    Squall,
    /// Id 781.
    Tornado,
    /// Id 800.
    Clear,
    /// Ids 801-804.
    Clouds,
}

impl WeatherCondition {
    /// Parses a condition group name (`"Rain"`, `"Clouds"`, ...).
    ///
    /// Matching ignores ASCII case. Returns `None` for names the provider does not define.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mausam::WeatherCondition;
    ///
    /// assert_eq!(WeatherCondition::from_main("Rain"), Some(WeatherCondition::Rain));
    /// assert_eq!(WeatherCondition::from_main("thunderstorm"), Some(WeatherCondition::Thunderstorm));
    /// assert_eq!(WeatherCondition::from_main("Sunny"), None);
    /// ```
    pub fn from_main(value: &str) -> Option<Self> {
        let value = value.trim();
        [
            WeatherCondition::Thunderstorm,
            WeatherCondition::Drizzle,
            WeatherCondition::Rain,
            WeatherCondition::Snow,
            WeatherCondition::Mist,
            WeatherCondition::Smoke,
            WeatherCondition::Haze,
            WeatherCondition::Dust,
            WeatherCondition::Fog,
            WeatherCondition::Sand,
            WeatherCondition::Ash,
            WeatherCondition::Squall,
            WeatherCondition::Tornado,
            WeatherCondition::Clear,
            WeatherCondition::Clouds,
        ]
        .into_iter()
        .find(|c| c.as_str().eq_ignore_ascii_case(value))
    }

    /// Maps a numeric condition id to its group.
    ///
    /// Returns `None` for ids outside the documented ranges.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            200..=232 => Some(WeatherCondition::Thunderstorm),
            300..=321 => Some(WeatherCondition::Drizzle),
            500..=531 => Some(WeatherCondition::Rain),
            600..=622 => Some(WeatherCondition::Snow),
            701 => Some(WeatherCondition::Mist),
            711 => Some(WeatherCondition::Smoke),
            721 => Some(WeatherCondition::Haze),
            731 | 761 => Some(WeatherCondition::Dust),
            741 => Some(WeatherCondition::Fog),
            751 => Some(WeatherCondition::Sand),
            762 => Some(WeatherCondition::Ash),
            771 => Some(WeatherCondition::Squall),
            781 => Some(WeatherCondition::Tornado),
            800 => Some(WeatherCondition::Clear),
            801..=804 => Some(WeatherCondition::Clouds),
            _ => None,
        }
    }

    /// The provider's group name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WeatherCondition::Thunderstorm => "Thunderstorm",
            WeatherCondition::Drizzle => "Drizzle",
            WeatherCondition::Rain => "Rain",
            WeatherCondition::Snow => "Snow",
            WeatherCondition::Mist => "Mist",
            WeatherCondition::Smoke => "Smoke",
            WeatherCondition::Haze => "Haze",
            WeatherCondition::Dust => "Dust",
            WeatherCondition::Fog => "Fog",
            WeatherCondition::Sand => "Sand",
            WeatherCondition::Ash => "Ash",
            WeatherCondition::Squall => "Squall",
            WeatherCondition::Tornado => "Tornado",
            WeatherCondition::Clear => "Clear",
            WeatherCondition::Clouds => "Clouds",
        }
    }

    /// Thunderstorms, tornadoes and squalls.
    pub fn is_severe(&self) -> bool {
        matches!(
            self,
            WeatherCondition::Thunderstorm | WeatherCondition::Tornado | WeatherCondition::Squall
        )
    }

    /// Fog, mist and haze.
    pub fn is_low_visibility(&self) -> bool {
        matches!(
            self,
            WeatherCondition::Fog | WeatherCondition::Mist | WeatherCondition::Haze
        )
    }

    /// Rain and drizzle.
    pub fn is_wet(&self) -> bool {
        matches!(self, WeatherCondition::Rain | WeatherCondition::Drizzle)
    }
}

impl fmt::Display for WeatherCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
