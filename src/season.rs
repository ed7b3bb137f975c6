use chrono::{Datelike, Local};
use serde::Serialize;

/// A travel season with its months and suggested destinations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonProfile {
    pub name: &'static str,
    /// Calendar months (1-12) belonging to this season.
    pub months: &'static [u32],
    pub description: &'static str,
    pub destinations: &'static [&'static str],
    pub tip: &'static str,
}

/// The four Indian travel seasons. Their month sets partition 1..=12.
pub static SEASONS: [SeasonProfile; 4] = [
    SeasonProfile {
        name: "Winter",
        months: &[12, 1, 2],
        description: "Cool and pleasant weather, perfect for exploring most of India.",
        destinations: &[
            "Goa (beaches)",
            "Rajasthan (Jaipur, Udaipur, Jaisalmer)",
            "Kerala (backwaters)",
            "Andaman & Nicobar Islands",
            "Rann of Kutch (Gujarat)",
            "Hampi (Karnataka)",
        ],
        tip: "Ideal time for beach trips, desert festivals, and cultural tours.",
    },
    SeasonProfile {
        name: "Summer",
        months: &[3, 4, 5],
        description: "Hot in most regions, but great for hill stations and the Himalayas.",
        destinations: &[
            "Manali & Shimla (Himachal Pradesh)",
            "Darjeeling (West Bengal)",
            "Ooty & Kodaikanal (Tamil Nadu)",
            "Sikkim",
            "Ladakh (Jammu & Kashmir)",
            "Mount Abu (Rajasthan)",
        ],
        tip: "Escape the heat by heading to the hills and mountains.",
    },
    SeasonProfile {
        name: "Monsoon",
        months: &[6, 7, 8, 9],
        description: "Lush landscapes, heavy rains in many regions. Great for nature lovers.",
        destinations: &[
            "Munnar & Wayanad (Kerala)",
            "Coorg (Karnataka)",
            "Meghalaya (Cherrapunji, Shillong)",
            "Valley of Flowers (Uttarakhand)",
            "Lonavala & Mahabaleshwar (Maharashtra)",
        ],
        tip: "Perfect for scenic drives, waterfalls, and off-season travel deals.",
    },
    SeasonProfile {
        name: "Autumn",
        months: &[10, 11],
        description: "Clear skies, pleasant weather, and festive season in India.",
        destinations: &[
            "Varanasi (Dev Deepawali)",
            "Kolkata (Durga Puja)",
            "Agra (Taj Mahal)",
            "Jodhpur (Rajasthan)",
            "Hampi (Karnataka)",
        ],
        tip: "Great for festivals, heritage sites, and city tours.",
    },
];

/// Season containing `month` (1-12). Any other value falls back to the first
/// profile.
///
/// ```
/// use mausam::current_season;
///
/// assert_eq!(current_season(7).name, "Monsoon");
/// assert_eq!(current_season(0).name, "Winter");
/// ```
pub fn current_season(month: u32) -> &'static SeasonProfile {
    SEASONS
        .iter()
        .find(|season| season.months.contains(&month))
        .unwrap_or(&SEASONS[0])
}

pub fn season_for(date: impl Datelike) -> &'static SeasonProfile {
    current_season(date.month())
}

/// Season for today's date in the host's local time zone.
pub fn season_today() -> &'static SeasonProfile {
    season_for(Local::now())
}
