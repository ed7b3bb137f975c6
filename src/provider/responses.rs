//! Wire formats of the OpenWeatherMap and Gemini endpoints and their
//! conversion into the crate's typed records.

use crate::classify::MoonPhase;
use crate::provider::error::ProviderError;
use crate::types::coordinate::{Coordinate, Location};
use crate::types::reports::{
    AirComponents, AirQualityReport, CurrentWeather, MinutePrecipitation, SkyReport,
};
use crate::types::sample::SampleInterval;
use crate::types::weather_condition::WeatherCondition;
use chrono::{DateTime, FixedOffset, Offset, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

fn utc(timestamp: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(timestamp, 0)
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeEntry {
    pub name: String,
    #[serde(default)]
    pub country: String,
    pub state: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

impl GeocodeEntry {
    /// `None` for entries without a usable coordinate.
    pub fn into_location(self) -> Option<Location> {
        let (lat, lon) = (self.lat?, self.lon?);
        match Coordinate::new(lat, lon) {
            Ok(coordinate) => Some(Location::new(self.name, self.country, self.state, coordinate)),
            Err(e) => {
                warn!("Dropping geocoding result '{}': {}", self.name, e);
                None
            }
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionEntry {
    pub id: Option<i64>,
    #[serde(default)]
    pub main: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

impl ConditionEntry {
    /// The group name, taken from the numeric id when `main` is blank.
    pub fn group(&self) -> String {
        if !self.main.trim().is_empty() {
            return self.main.clone();
        }
        self.id
            .and_then(WeatherCondition::from_id)
            .map(|c| c.as_str().to_string())
            .unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct Coord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
    pub feels_like: Option<f64>,
    pub temp_min: f64,
    pub temp_max: f64,
    #[serde(default)]
    pub pressure: f64,
    #[serde(default)]
    pub humidity: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Wind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Sys {
    pub country: Option<String>,
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    pub coord: Coord,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    #[serde(default)]
    pub wind: Wind,
    pub dt: i64,
    #[serde(default)]
    pub sys: Sys,
    #[serde(default)]
    pub name: String,
}

impl CurrentResponse {
    pub fn into_current_weather(self, url: &str) -> Result<CurrentWeather, ProviderError> {
        let condition = self
            .weather
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MissingField {
                url: url.to_string(),
                field: "weather",
            })?;
        let observed_at = utc(self.dt).ok_or_else(|| ProviderError::MissingField {
            url: url.to_string(),
            field: "dt",
        })?;

        Ok(CurrentWeather {
            station_name: self.name,
            station_country: self.sys.country,
            station_coordinate: Coordinate::new(self.coord.lat, self.coord.lon)?,
            temp_c: self.main.temp,
            feels_like_c: self.main.feels_like,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            humidity_pct: self.main.humidity,
            pressure_hpa: self.main.pressure,
            wind_speed: self.wind.speed,
            condition_code: condition.group(),
            description: condition.description,
            icon_code: condition.icon,
            sunrise: self.sys.sunrise.and_then(utc),
            sunset: self.sys.sunset.and_then(utc),
            observed_at,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Rain {
    #[serde(rename = "3h")]
    pub three_hours: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastEntry {
    pub dt: i64,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    #[serde(default)]
    pub wind: Wind,
    pub rain: Option<Rain>,
}

impl ForecastEntry {
    fn into_sample(self) -> SampleInterval {
        let condition = self.weather.into_iter().next();
        let (condition_code, condition_description, icon_code) = condition
            .map(|c| (c.group(), c.description, c.icon))
            .unwrap_or_default();
        SampleInterval {
            timestamp: self.dt,
            temp_c: self.main.temp,
            temp_min_c: self.main.temp_min,
            temp_max_c: self.main.temp_max,
            wind_speed: self.wind.speed,
            precipitation_mm: self.rain.and_then(|r| r.three_hours),
            condition_code,
            condition_description,
            icon_code,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ForecastCity {
    /// Shift from UTC in seconds.
    #[serde(default)]
    pub timezone: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<ForecastEntry>,
    #[serde(default)]
    pub city: ForecastCity,
}

impl ForecastResponse {
    pub fn into_parts(self) -> (Vec<SampleInterval>, FixedOffset) {
        let utc_offset = FixedOffset::east_opt(self.city.timezone).unwrap_or_else(|| {
            warn!(
                "Ignoring out-of-range forecast timezone offset {}",
                self.city.timezone
            );
            Utc.fix()
        });
        let samples = self.list.into_iter().map(ForecastEntry::into_sample).collect();
        (samples, utc_offset)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirMain {
    pub aqi: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirEntry {
    pub dt: Option<i64>,
    pub main: AirMain,
    #[serde(default)]
    pub components: AirComponents,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AirResponse {
    #[serde(default)]
    pub list: Vec<AirEntry>,
}

impl AirResponse {
    pub fn into_report(self, url: &str) -> Result<AirQualityReport, ProviderError> {
        let entry = self
            .list
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::MissingField {
                url: url.to_string(),
                field: "list",
            })?;
        Ok(AirQualityReport {
            aqi: entry.main.aqi,
            pollutants: entry.components,
            measured_at: entry.dt.and_then(utc),
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct OneCallCurrent {
    pub uvi: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OneCallMinute {
    pub dt: i64,
    #[serde(default)]
    pub precipitation: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OneCallDay {
    pub sunrise: Option<i64>,
    pub sunset: Option<i64>,
    pub moon_phase: Option<f64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OneCallResponse {
    #[serde(default)]
    pub current: OneCallCurrent,
    pub minutely: Option<Vec<OneCallMinute>>,
    #[serde(default)]
    pub daily: Vec<OneCallDay>,
}

impl OneCallResponse {
    pub fn minutes(&self) -> Option<Vec<MinutePrecipitation>> {
        self.minutely.as_ref().map(|minutes| {
            minutes
                .iter()
                .map(|m| MinutePrecipitation {
                    timestamp: m.dt,
                    precipitation_mm: m.precipitation,
                })
                .collect()
        })
    }

    pub fn sky(&self) -> SkyReport {
        let today = self.daily.first();
        SkyReport {
            sunrise: today.and_then(|d| d.sunrise).and_then(utc),
            sunset: today.and_then(|d| d.sunset).and_then(utc),
            moon_phase: today
                .and_then(|d| d.moon_phase)
                .map(MoonPhase::from_fraction),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiRequest<'a> {
    pub contents: [GeminiContent<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiContent<'a> {
    pub parts: [GeminiPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiPart<'a> {
    pub text: &'a str,
}

impl<'a> GeminiRequest<'a> {
    pub fn new(prompt: &'a str) -> Self {
        Self {
            contents: [GeminiContent {
                parts: [GeminiPart { text: prompt }],
            }],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiCandidate {
    #[serde(default)]
    pub content: GeminiCandidateContent,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiCandidateContent {
    #[serde(default)]
    pub parts: Vec<GeminiTextPart>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GeminiTextPart {
    pub text: Option<String>,
}

impl GeminiResponse {
    pub fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .next()?
            .content
            .parts
            .into_iter()
            .next()?
            .text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_forecast_rain_and_offset() {
        let response: ForecastResponse = serde_json::from_value(json!({
            "list": [
                {
                    "dt": 1717372800,
                    "main": { "temp": 30.1, "temp_min": 29.0, "temp_max": 31.5 },
                    "weather": [{ "main": "Rain", "description": "light rain", "icon": "10d" }],
                    "wind": { "speed": 4.2 },
                    "rain": { "3h": 0.75 }
                },
                {
                    "dt": 1717383600,
                    "main": { "temp": 28.0, "temp_min": 27.5, "temp_max": 28.4 },
                    "weather": [],
                    "wind": { "speed": 3.0 }
                }
            ],
            "city": { "timezone": 19800 }
        }))
        .unwrap();

        let (samples, offset) = response.into_parts();
        assert_eq!(offset.local_minus_utc(), 19800);
        assert_eq!(samples[0].precipitation_mm, Some(0.75));
        assert_eq!(samples[0].condition_code, "Rain");
        assert_eq!(samples[0].icon_code, "10d");
        assert_eq!(samples[1].precipitation_mm, None);
        assert_eq!(samples[1].condition_code, "");
    }

    #[test]
    fn test_condition_group_falls_back_to_id() {
        let entry: ConditionEntry =
            serde_json::from_value(json!({ "id": 502, "description": "heavy intensity rain" }))
                .unwrap();
        assert_eq!(entry.group(), "Rain");

        let named: ConditionEntry =
            serde_json::from_value(json!({ "id": 800, "main": "Clear" })).unwrap();
        assert_eq!(named.group(), "Clear");

        let unknown: ConditionEntry = serde_json::from_value(json!({ "id": 999 })).unwrap();
        assert_eq!(unknown.group(), "");
    }

    #[test]
    fn test_forecast_sample_group_from_id() {
        let entry: ForecastEntry = serde_json::from_value(json!({
            "dt": 1717372800,
            "main": { "temp": 12.0, "temp_min": 11.0, "temp_max": 13.0 },
            "weather": [{ "id": 741, "main": "", "description": "fog", "icon": "50n" }]
        }))
        .unwrap();
        let sample = entry.into_sample();
        assert_eq!(sample.condition_code, "Fog");
        assert_eq!(sample.icon_code, "50n");
    }

    #[test]
    fn test_geocode_entry_without_coordinates_is_dropped() {
        let entry: GeocodeEntry =
            serde_json::from_value(json!({ "name": "Nowhere", "country": "XX" })).unwrap();
        assert!(entry.into_location().is_none());

        let entry: GeocodeEntry = serde_json::from_value(
            json!({ "name": "Null Island", "country": "XX", "lat": 0.0, "lon": 0.0 }),
        )
        .unwrap();
        assert_eq!(entry.into_location().unwrap().coordinate.latitude, 0.0);
    }

    #[test]
    fn test_current_requires_condition() {
        let response: CurrentResponse = serde_json::from_value(json!({
            "coord": { "lat": 28.61, "lon": 77.21 },
            "weather": [],
            "main": { "temp": 30.0, "temp_min": 29.0, "temp_max": 31.0 },
            "dt": 1717372800,
            "name": "Delhi"
        }))
        .unwrap();
        let err = response.into_current_weather("http://x/data/2.5/weather").unwrap_err();
        assert!(matches!(err, ProviderError::MissingField { field: "weather", .. }));
    }

    #[test]
    fn test_one_call_sky() {
        let response: OneCallResponse = serde_json::from_value(json!({
            "current": { "uvi": 7.2 },
            "daily": [{ "sunrise": 1717372800, "sunset": 1717422000, "moon_phase": 0.5 }]
        }))
        .unwrap();
        assert!(response.minutes().is_none());
        let sky = response.sky();
        assert_eq!(sky.moon_phase, Some(MoonPhase::FullMoon));
        assert_eq!(sky.sunrise.unwrap().timestamp(), 1717372800);
    }

    #[test]
    fn test_gemini_text_extraction() {
        let response: GeminiResponse = serde_json::from_value(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Hot and hazy." }] } }]
        }))
        .unwrap();
        assert_eq!(response.first_text().as_deref(), Some("Hot and hazy."));

        let empty: GeminiResponse = serde_json::from_value(json!({})).unwrap();
        assert!(empty.first_text().is_none());
    }

    #[test]
    fn test_gemini_request_shape() {
        let body = serde_json::to_value(GeminiRequest::new("hello")).unwrap();
        assert_eq!(body, json!({ "contents": [{ "parts": [{ "text": "hello" }] }] }));
    }
}
