use crate::types::coordinate::{Coordinate, Location};
use haversine::{distance, Location as HaversineLocation, Units};
use ordered_float::OrderedFloat;
use serde::Serialize;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Stations further than this from the selected point are reported as a mismatch.
pub const STATION_MISMATCH_KM: f64 = 2.0;

/// Haversine great-circle distance in kilometers (Earth radius 6371 km).
///
/// `distance_km(a, a)` is zero and the result is bit-for-bit symmetric in its
/// arguments: the points are put in a canonical order before the formula runs.
/// Antipodal points whose rounding error would take the formula out of its
/// domain come back as half the Earth's circumference.
///
/// # Examples
///
/// ```
/// use mausam::{distance_km, Coordinate};
///
/// let delhi = Coordinate::new(28.6139, 77.2090).unwrap();
/// let mumbai = Coordinate::new(19.0760, 72.8777).unwrap();
/// let d = distance_km(delhi, mumbai);
/// assert!((d - 1148.1).abs() < 1.0);
/// assert_eq!(d, distance_km(mumbai, delhi));
/// ```
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let key = |c: &Coordinate| (OrderedFloat(c.latitude), OrderedFloat(c.longitude));
    let (a, b) = if key(&a) <= key(&b) { (a, b) } else { (b, a) };
    let d = distance(
        HaversineLocation {
            latitude: a.latitude,
            longitude: a.longitude,
        },
        HaversineLocation {
            latitude: b.latitude,
            longitude: b.longitude,
        },
        Units::Kilometers,
    );
    if d.is_nan() {
        std::f64::consts::PI * EARTH_RADIUS_KM
    } else {
        d
    }
}

/// The provider answered for a station other than the selected place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationMismatch {
    pub station_name: String,
    pub distance_km: f64,
}

/// Checks whether the weather shown belongs to the place the user selected.
///
/// A mismatch is reported when the station name differs from the selected
/// city (ignoring case), or when the station is more than
/// [`STATION_MISMATCH_KM`] away.
pub fn station_mismatch(
    selected: &Location,
    station_name: &str,
    station: Coordinate,
) -> Option<StationMismatch> {
    let distance_km = distance_km(selected.coordinate, station);
    let name_differs = !station_name.is_empty()
        && !selected.city.is_empty()
        && selected.city.to_lowercase() != station_name.to_lowercase();

    if name_differs || distance_km > STATION_MISMATCH_KM {
        Some(StationMismatch {
            station_name: station_name.to_string(),
            distance_km,
        })
    } else {
        None
    }
}

/// Sorts `locations` by distance from `origin`, closest first.
pub fn rank_by_distance(origin: Coordinate, locations: Vec<Location>) -> Vec<(Location, f64)> {
    let mut ranked: Vec<(Location, f64)> = locations
        .into_iter()
        .map(|location| {
            let d = distance_km(origin, location.coordinate);
            (location, d)
        })
        .collect();
    // Stable sort keeps the geocoder's order for equidistant results.
    ranked.sort_by_key(|(_, d)| OrderedFloat(*d));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coordinate(latitude: f64, longitude: f64) -> Coordinate {
        Coordinate::new(latitude, longitude).unwrap()
    }

    #[test]
    fn test_distance_to_self_is_zero() {
        for c in [
            coordinate(0.0, 0.0),
            coordinate(28.6139, 77.2090),
            coordinate(-33.8688, 151.2093),
            coordinate(89.9, -179.9),
        ] {
            assert!(distance_km(c, c).abs() < 1e-9);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let pairs = [
            (coordinate(51.5074, -0.1278), coordinate(40.7128, -74.0060)),
            (coordinate(-33.8688, 151.2093), coordinate(35.6762, 139.6503)),
            (coordinate(0.0, 179.5), coordinate(0.0, -179.5)),
        ];
        for (a, b) in pairs {
            let ab = distance_km(a, b);
            let ba = distance_km(b, a);
            assert!(ab >= 0.0);
            assert_eq!(ab, ba);
        }
    }

    #[test]
    fn test_distance_known_value() {
        // One degree of longitude on the equator.
        let d = distance_km(coordinate(0.0, 0.0), coordinate(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.1, "got {}", d);
    }

    #[test]
    fn test_distance_antipodal_is_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        let mut lat = -90.0;
        while lat <= 90.0 {
            let mut lon = -180.0;
            while lon <= 180.0 {
                let opposite_lon = if lon <= 0.0 { lon + 180.0 } else { lon - 180.0 };
                let a = coordinate(lat, lon);
                let b = coordinate(-lat, opposite_lon);
                let d = distance_km(a, b);
                assert!(d.is_finite(), "NaN for ({}, {})", lat, lon);
                assert!(d >= 0.0 && d <= half_circumference + 1e-6, "got {}", d);
                lon += 0.37;
            }
            lat += 0.29;
        }
    }

    #[test]
    fn test_distance_known_antipode() {
        let d = distance_km(coordinate(-88.26, -180.0), coordinate(88.26, 0.0));
        assert!((d - std::f64::consts::PI * EARTH_RADIUS_KM).abs() < 1.0, "got {}", d);
    }

    #[test]
    fn test_station_mismatch_at_antipode() {
        let selected = Location::new("Here", "XX", None, coordinate(-88.26, -180.0));
        let mismatch = station_mismatch(&selected, "Here", coordinate(88.26, 0.0)).unwrap();
        assert!(mismatch.distance_km > STATION_MISMATCH_KM);
    }

    #[test]
    fn test_station_mismatch_by_name() {
        let selected = Location::default();
        let mismatch = station_mismatch(&selected, "Connaught Place", selected.coordinate).unwrap();
        assert_eq!(mismatch.station_name, "Connaught Place");
        assert!(mismatch.distance_km < 1e-9);

        assert!(station_mismatch(&selected, "new delhi", selected.coordinate).is_none());
    }

    #[test]
    fn test_station_mismatch_by_distance() {
        let selected = Location::default();
        let nearby = coordinate(28.62, 77.21);
        assert!(station_mismatch(&selected, "New Delhi", nearby).is_none());

        let far = coordinate(28.70, 77.10);
        let mismatch = station_mismatch(&selected, "New Delhi", far).unwrap();
        assert!(mismatch.distance_km > STATION_MISMATCH_KM);
    }

    #[test]
    fn test_rank_by_distance() {
        let origin = coordinate(28.6139, 77.2090);
        let places = vec![
            Location::new("Mumbai", "IN", None, coordinate(19.0760, 72.8777)),
            Location::new("Agra", "IN", None, coordinate(27.1767, 78.0081)),
            Location::new("Jaipur", "IN", None, coordinate(26.9124, 75.7873)),
        ];
        let ranked = rank_by_distance(origin, places);
        let names: Vec<_> = ranked.iter().map(|(l, _)| l.city.as_str()).collect();
        assert_eq!(names, ["Agra", "Jaipur", "Mumbai"]);
        assert!(ranked.windows(2).all(|w| w[0].1 <= w[1].1));
    }

    #[test]
    fn test_rank_by_distance_empty() {
        assert!(rank_by_distance(coordinate(0.0, 0.0), Vec::new()).is_empty());
    }
}
