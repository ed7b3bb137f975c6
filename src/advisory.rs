//! Static advisory (tip) rules, activity suggestions and rotating facts.

use crate::types::condition::ConditionSnapshot;
use crate::types::weather_condition::WeatherCondition;
use serde::Serialize;
use std::fmt;

/// Decides whether a rule applies. Rules that read an absent optional field
/// return `false`.
pub type Predicate = fn(&ConditionSnapshot) -> bool;

/// A tip text guarded by a predicate over the current conditions.
#[derive(Clone, Copy)]
pub struct AdvisoryRule {
    pub text: &'static str,
    pub predicate: Predicate,
}

impl AdvisoryRule {
    pub const fn new(text: &'static str, predicate: Predicate) -> Self {
        Self { text, predicate }
    }

    pub fn applies(&self, snapshot: &ConditionSnapshot) -> bool {
        (self.predicate)(snapshot)
    }
}

impl fmt::Debug for AdvisoryRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdvisoryRule")
            .field("text", &self.text)
            .finish_non_exhaustive()
    }
}

fn always(_: &ConditionSnapshot) -> bool {
    true
}

fn uv_at_least_moderate(s: &ConditionSnapshot) -> bool {
    s.uv_index.is_some_and(|uv| uv >= 3.0)
}

fn poor_air(s: &ConditionSnapshot) -> bool {
    s.aqi.is_some_and(|aqi| aqi >= 4)
}

fn hot(s: &ConditionSnapshot) -> bool {
    s.temp_c >= 30.0
}

fn severe(s: &ConditionSnapshot) -> bool {
    s.condition().is_some_and(|c| c.is_severe())
}

/// The tip table, in display order.
pub static ADVISORY_RULES: &[AdvisoryRule] = &[
    AdvisoryRule::new("Stay hydrated!", always),
    AdvisoryRule::new("Check the weather before heading out.", always),
    AdvisoryRule::new("Dress in layers for changing weather.", always),
    AdvisoryRule::new("Keep emergency supplies handy during storms.", |s| {
        s.condition_is(WeatherCondition::Thunderstorm)
    }),
    AdvisoryRule::new("Use sunscreen when UV is moderate or higher.", uv_at_least_moderate),
    AdvisoryRule::new("Limit outdoor activity when air quality is poor.", poor_air),
    AdvisoryRule::new("Wear a hat and sunglasses for sun protection.", uv_at_least_moderate),
    AdvisoryRule::new("Avoid strenuous activity during high heat.", hot),
    AdvisoryRule::new("Check pollen levels if you have allergies.", always),
    AdvisoryRule::new(
        "Children and elderly should take extra care in extreme weather.",
        |s| s.temp_c >= 32.0 || s.temp_c <= 0.0,
    ),
    AdvisoryRule::new("Carry an umbrella if rain is expected.", |s| {
        s.condition_is(WeatherCondition::Rain)
    }),
    AdvisoryRule::new("Drive carefully in foggy conditions.", |s| {
        s.condition_is(WeatherCondition::Fog)
    }),
    AdvisoryRule::new("Wear waterproof shoes in wet weather.", |s| {
        s.condition().is_some_and(|c| c.is_wet())
    }),
    AdvisoryRule::new("Watch for icy sidewalks in freezing weather.", |s| s.temp_c <= 0.0),
    AdvisoryRule::new("Bundle up in cold weather.", |s| s.temp_c <= 5.0),
    AdvisoryRule::new("Use moisturizer to protect skin in dry air.", |s| {
        s.humidity_pct < 30.0
    }),
    AdvisoryRule::new("Open windows to reduce indoor humidity.", |s| s.humidity_pct > 70.0),
    AdvisoryRule::new("Secure loose objects outdoors in high winds.", |s| s.wind_speed >= 10.0),
    AdvisoryRule::new("Wear a mask if pollen or pollution is high.", |s| {
        poor_air(s) || s.pollen_index.is_some_and(|p| p > 2.0)
    }),
    AdvisoryRule::new("Shovel snow carefully to avoid injury.", |s| {
        s.condition_is(WeatherCondition::Snow)
    }),
    AdvisoryRule::new("Check for weather alerts in your area.", always),
    AdvisoryRule::new("Let someone know your route if hiking or biking.", always),
    AdvisoryRule::new("Stay indoors during severe weather warnings.", severe),
    AdvisoryRule::new("Keep pets safe and hydrated in hot weather.", hot),
    AdvisoryRule::new("Avoid walking under trees during strong winds.", |s| s.wind_speed >= 15.0),
    AdvisoryRule::new("Use hand warmers in very cold weather.", |s| s.temp_c <= -5.0),
    AdvisoryRule::new("Wear bright clothing in fog or low visibility.", |s| {
        s.condition().is_some_and(|c| c.is_low_visibility())
    }),
    AdvisoryRule::new("Check local news for updates during storms.", severe),
];

/// Texts of the rules that apply to `snapshot`, in table order.
///
/// No ranking or de-duplication is performed.
///
/// # Examples
///
/// ```
/// use mausam::{select_advisories, ConditionSnapshot, ADVISORY_RULES};
///
/// let snapshot = ConditionSnapshot::new(-6.0, 50.0, 2.0, "Snow");
/// let tips = select_advisories(&snapshot, ADVISORY_RULES);
/// assert!(tips.contains(&"Use hand warmers in very cold weather."));
/// assert!(tips.contains(&"Shovel snow carefully to avoid injury."));
/// ```
pub fn select_advisories(snapshot: &ConditionSnapshot, rules: &[AdvisoryRule]) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| rule.applies(snapshot))
        .map(|rule| rule.text)
        .collect()
}

/// A single recommendation derived from UV index and air quality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivitySuggestion {
    pub text: &'static str,
    pub icon: &'static str,
    pub color_class: &'static str,
}

/// Picks the health tab's activity suggestion. Poor air outranks strong UV.
pub fn activity_suggestion(uv_index: f64, aqi: i64) -> ActivitySuggestion {
    let (text, icon, color_class) = if aqi >= 4 {
        (
            "Indoor activities recommended due to poor air quality.",
            "🏠",
            "bg-red-100 text-red-700",
        )
    } else if uv_index >= 8.0 {
        (
            "Avoid outdoor activities during midday; try early morning or evening walks.",
            "🌞",
            "bg-orange-100 text-orange-700",
        )
    } else if aqi <= 2 && uv_index < 6.0 {
        (
            "Great day for outdoor activities!",
            "🏃",
            "bg-green-100 text-green-700",
        )
    } else {
        (
            "Check conditions before planning outdoor activities.",
            "ℹ️",
            "bg-blue-100 text-blue-700",
        )
    };
    ActivitySuggestion {
        text,
        icon,
        color_class,
    }
}

/// One-line activity idea for the sidebar, keyed on the condition group and
/// then on temperature.
pub fn condition_activity(snapshot: Option<&ConditionSnapshot>) -> &'static str {
    let Some(snapshot) = snapshot else {
        return "Check the weather for activity suggestions!";
    };
    let group = snapshot.condition_code.to_lowercase();
    if group.contains("rain") {
        "It’s rainy. Great day for indoor activities or reading a book!"
    } else if group.contains("clear") {
        "Clear skies! Perfect for a walk, run, or outdoor sports."
    } else if group.contains("cloud") {
        "Cloudy but nice for a stroll or light exercise."
    } else if group.contains("snow") {
        "Snowy day! Try building a snowman or enjoy a hot drink inside."
    } else if group.contains("storm") {
        "Stormy weather. Best to stay indoors and stay safe!"
    } else if snapshot.temp_c > 32.0 {
        "Very hot! Stay hydrated and avoid strenuous outdoor activity."
    } else if snapshot.temp_c < 5.0 {
        "Chilly outside. Dress warmly if you go out!"
    } else {
        "Enjoy your day!"
    }
}

pub const GENERAL_HEALTH_TIPS: [&str; 6] = [
    "Stay hydrated, especially during hot weather.",
    "Check pollen levels if you have allergies.",
    "Wear a hat and sunglasses for sun protection.",
    "Avoid outdoor exercise during high pollution or extreme heat.",
    "Use sunscreen with SPF 30+ when UV is moderate or higher.",
    "Children, elderly, and those with respiratory issues should take extra care.",
];

pub const WEATHER_FACTS: [&str; 7] = [
    "Did you know? The highest temperature ever recorded on Earth was 56.7°C (134°F) in Death Valley, USA.",
    "Raindrops can fall at speeds of about 22 miles per hour!",
    "The coldest temperature ever recorded was -89.2°C (-128.6°F) in Antarctica.",
    "A bolt of lightning is five times hotter than the surface of the sun.",
    "The wettest place on Earth is Mawsynram, India, with 11,871mm of rain annually.",
    "Snowflakes can fall at speeds of 1-6 feet per second.",
    "The fastest wind speed ever recorded was 253 mph during Cyclone Olivia in 1996.",
];

/// Seconds each fact stays on screen before rotating to the next.
pub const FACT_ROTATION_SECS: u64 = 10;

/// The `n`-th fact of the rotation, wrapping around.
pub fn weather_fact(n: usize) -> &'static str {
    WEATHER_FACTS[n % WEATHER_FACTS.len()]
}
