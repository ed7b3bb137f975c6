use crate::config::MausamConfig;
use crate::error::MausamError;
use crate::forecast::{aggregate_by_day_in, hourly_outlook};
use crate::provider::error::ProviderError;
use crate::provider::fetch_json;
use crate::provider::responses::{
    AirResponse, CurrentResponse, ForecastResponse, GeocodeEntry, OneCallResponse,
};
use crate::types::coordinate::{Coordinate, Location};
use crate::types::reports::{AirQualityReport, CurrentWeather, MinuteCast, SkyReport};
use crate::types::sample::{DayAggregate, HourlyPoint, SampleInterval};
use chrono::FixedOffset;
use log::info;
use reqwest::Client;

const GEOCODE_PATH: &str = "/geo/1.0/direct";
const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";
const ONE_CALL_PATH: &str = "/data/3.0/onecall";

/// Shortest query sent to the geocoder.
pub const MIN_GEOCODE_QUERY_CHARS: usize = 2;

/// The 5-day/3-hour forecast and the UTC offset of the forecast location.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    pub samples: Vec<SampleInterval>,
    pub utc_offset: FixedOffset,
}

impl Forecast {
    /// Up to `days` calendar days, grouped in the location's own time zone.
    pub fn days(&self, days: usize) -> Vec<DayAggregate> {
        let mut aggregated = aggregate_by_day_in(&self.samples, &self.utc_offset);
        aggregated.truncate(days);
        aggregated
    }

    /// The first `samples` raw intervals, labelled in the location's time zone.
    pub fn hours(&self, samples: usize) -> Vec<HourlyPoint> {
        hourly_outlook(&self.samples, samples, &self.utc_offset)
    }
}

/// One Call 3.0 data: current UV index, per-minute precipitation and today's sky.
#[derive(Debug, Clone, PartialEq)]
pub struct OneCall {
    url: String,
    uv_index: Option<f64>,
    minute_cast: Option<MinuteCast>,
    sky: SkyReport,
}

impl OneCall {
    pub fn uv_index(&self) -> Option<f64> {
        self.uv_index
    }

    /// Fails when the provider did not include per-minute data (it only does
    /// for some regions).
    pub fn minute_cast(&self) -> Result<MinuteCast, ProviderError> {
        self.minute_cast
            .clone()
            .ok_or_else(|| ProviderError::MissingField {
                url: self.url.clone(),
                field: "minutely",
            })
    }

    pub fn sky(&self) -> SkyReport {
        self.sky.clone()
    }
}

/// Client for the OpenWeatherMap endpoints. All requests use metric units.
#[derive(Clone)]
pub struct OpenWeatherClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl OpenWeatherClient {
    pub fn new(config: &MausamConfig) -> Result<Self, MausamError> {
        Ok(Self {
            http: crate::provider::http_client(config.request_timeout)?,
            api_key: config.openweather_api_key.clone(),
            base_url: config.openweather_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<T, ProviderError> {
        let request = self
            .http
            .get(url)
            .query(params)
            .query(&[("appid", self.api_key.as_str())]);
        fetch_json(request, url).await
    }

    fn coordinate_params(coordinate: Coordinate) -> Vec<(&'static str, String)> {
        vec![
            ("lat", coordinate.latitude.to_string()),
            ("lon", coordinate.longitude.to_string()),
            ("units", "metric".to_string()),
        ]
    }

    /// Looks up places by name. Queries shorter than two characters return an
    /// empty list without a request. Results without coordinates are dropped.
    pub async fn geocode(&self, query: &str, limit: usize) -> Result<Vec<Location>, ProviderError> {
        let query = query.trim();
        if query.chars().count() < MIN_GEOCODE_QUERY_CHARS {
            return Ok(Vec::new());
        }
        let url = self.url(GEOCODE_PATH);
        let entries: Vec<GeocodeEntry> = self
            .get(&url, &[("q", query.to_string()), ("limit", limit.to_string())])
            .await?;
        let locations: Vec<Location> = entries
            .into_iter()
            .filter_map(GeocodeEntry::into_location)
            .collect();
        info!("Geocoding '{}' returned {} locations", query, locations.len());
        Ok(locations)
    }

    pub async fn current_weather(&self, coordinate: Coordinate) -> Result<CurrentWeather, ProviderError> {
        let url = self.url(CURRENT_PATH);
        let response: CurrentResponse = self.get(&url, &Self::coordinate_params(coordinate)).await?;
        response.into_current_weather(&url)
    }

    /// Current weather by place name, e.g. `"Jaipur,IN"`.
    pub async fn current_weather_by_name(&self, name: &str) -> Result<CurrentWeather, ProviderError> {
        let url = self.url(CURRENT_PATH);
        let response: CurrentResponse = self
            .get(&url, &[("q", name.to_string()), ("units", "metric".to_string())])
            .await?;
        response.into_current_weather(&url)
    }

    pub async fn forecast(&self, coordinate: Coordinate) -> Result<Forecast, ProviderError> {
        let url = self.url(FORECAST_PATH);
        let response: ForecastResponse = self.get(&url, &Self::coordinate_params(coordinate)).await?;
        let (samples, utc_offset) = response.into_parts();
        info!("Received {} forecast samples for {}", samples.len(), coordinate);
        Ok(Forecast {
            samples,
            utc_offset,
        })
    }

    pub async fn air_quality(&self, coordinate: Coordinate) -> Result<AirQualityReport, ProviderError> {
        let url = self.url(AIR_POLLUTION_PATH);
        let response: AirResponse = self.get(&url, &Self::coordinate_params(coordinate)).await?;
        response.into_report(&url)
    }

    pub async fn one_call(&self, coordinate: Coordinate) -> Result<OneCall, ProviderError> {
        let url = self.url(ONE_CALL_PATH);
        let response: OneCallResponse = self.get(&url, &Self::coordinate_params(coordinate)).await?;
        Ok(OneCall {
            uv_index: response.current.uvi,
            minute_cast: response.minutes().map(|minutes| MinuteCast { minutes }),
            sky: response.sky(),
            url,
        })
    }
}
