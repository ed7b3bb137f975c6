//! Defines the geographical types used throughout the crate: a validated
//! [`Coordinate`] and the user-selected [`Location`] that carries it.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Returned when a latitude/longitude pair is outside the valid range or not finite.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("Invalid coordinate (lat: {latitude}, lon: {longitude})")]
pub struct InvalidCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A geographical point in decimal degrees.
///
/// Latitude is in `[-90, 90]` (positive for North), longitude in `[-180, 180]`
/// (positive for East). Use [`Coordinate::new`] when the values come from
/// outside the program; it rejects out-of-range and non-finite input.
///
/// # Examples
///
/// ```
/// use mausam::Coordinate;
///
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// assert_eq!(delhi.latitude, 28.6139);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(f64::NAN, 0.0).is_err());
/// ```
///
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedCoordinate")]
pub struct Coordinate {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a coordinate, validating both components.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinate> {
        let coordinate = Self {
            latitude,
            longitude,
        };
        if coordinate.is_valid() {
            Ok(coordinate)
        } else {
            Err(InvalidCoordinate {
                latitude,
                longitude,
            })
        }
    }

    /// `true` when both components are finite and within range.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in kilometers.
    pub fn distance_km(&self, other: &Coordinate) -> f64 {
        crate::geo::distance_km(*self, *other)
    }
}

#[derive(Deserialize)]
struct UncheckedCoordinate {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<UncheckedCoordinate> for Coordinate {
    type Error = InvalidCoordinate;

    fn try_from(raw: UncheckedCoordinate) -> Result<Self, Self::Error> {
        Coordinate::new(raw.latitude, raw.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Lat: {}, Lon: {}", self.latitude, self.longitude)
    }
}

/// A place picked by the user from search results.
///
/// A new selection replaces the previous `Location` wholesale; there are no
/// mutating methods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// City, town or village name as reported by the geocoder.
    pub city: String,
    /// Country code (e.g. "IN", "GB").
    pub country: String,
    /// State or province, if the geocoder reported one.
    pub region: Option<String>,
    /// Where the place is.
    pub coordinate: Coordinate,
}

impl Location {
    pub fn new(
        city: impl Into<String>,
        country: impl Into<String>,
        region: Option<String>,
        coordinate: Coordinate,
    ) -> Self {
        Self {
            city: city.into(),
            country: country.into(),
            region: region.filter(|r| !r.is_empty()),
            coordinate,
        }
    }

    /// `City, Region, Country`, or `City, Country` when there is no region.
    pub fn display_name(&self) -> String {
        match self.region.as_deref() {
            Some(region) if !region.is_empty() => {
                format!("{}, {}, {}", self.city, region, self.country)
            }
            _ => format!("{}, {}", self.city, self.country),
        }
    }
}

/// The dashboard's initial selection: New Delhi, India.
impl Default for Location {
    fn default() -> Self {
        Self {
            city: "New Delhi".to_string(),
            country: "IN".to_string(),
            region: None,
            coordinate: Coordinate {
                latitude: 28.6139,
                longitude: 77.2090,
            },
        }
    }
}
