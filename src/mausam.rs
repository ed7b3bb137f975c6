//! This module provides the main entry point of the crate: the [`Mausam`]
//! client, which combines the provider adapters with the derived metrics
//! (classification, aggregation, advisories) behind one API.

use crate::advisory::{activity_suggestion, select_advisories, ADVISORY_RULES};
use crate::classify::{classify_aqi, classify_uv};
use crate::clients::forecast_client::ForecastClient;
use crate::config::MausamConfig;
use crate::error::MausamError;
use crate::geo::{rank_by_distance, station_mismatch};
use crate::provider::openweather::OpenWeatherClient;
use crate::provider::summary::{location_prompt, state_prompt, SummaryClient};
use crate::regions::capital_of;
use crate::season::{season_today, SeasonProfile};
use crate::types::condition::ConditionSnapshot;
use crate::types::coordinate::{Coordinate, Location};
use crate::types::reports::{
    AirQualityReport, CurrentReport, HealthReport, MinuteCast, SkyReport, StateBulletin,
};
use bon::bon;
use log::{info, warn};

/// Number of geocoding results requested when no limit is given.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// The main client for weather data and the metrics derived from it.
///
/// Create one with [`Mausam::new()`] from an explicit [`MausamConfig`], or
/// with [`Mausam::from_env()`]. The client holds no per-location state; every
/// call takes the coordinate or [`Location`] it is about.
///
/// # Examples
///
/// ```rust
/// # use mausam::{Mausam, MausamConfig, MausamError};
/// # fn run() -> Result<(), MausamError> {
/// let client = Mausam::new(MausamConfig::builder().openweather_api_key("my-key").build())?;
/// println!("Current season: {}", client.season().name);
/// # Ok(())
/// # }
/// ```
pub struct Mausam {
    weather: OpenWeatherClient,
    summary: Option<SummaryClient>,
}

#[bon]
impl Mausam {
    /// Creates a client from `config`. AI summaries are only available when
    /// a Gemini key is configured.
    ///
    /// # Errors
    ///
    /// Returns [`MausamError::HttpClient`] if the HTTP client cannot be built.
    pub fn new(config: MausamConfig) -> Result<Self, MausamError> {
        let summary = match SummaryClient::new(&config) {
            Ok(client) => Some(client),
            Err(MausamError::SummaryDisabled) => {
                info!("No Gemini API key configured, AI summaries disabled");
                None
            }
            Err(e) => return Err(e),
        };
        Ok(Self {
            weather: OpenWeatherClient::new(&config)?,
            summary,
        })
    }

    /// Creates a client configured from `MAUSAM_*` environment variables
    /// (see [`MausamConfig::from_env`]).
    ///
    /// # Errors
    ///
    /// Returns [`MausamError::MissingEnvVar`] if `MAUSAM_OWM_API_KEY` is not set.
    pub fn from_env() -> Result<Self, MausamError> {
        Self::new(MausamConfig::from_env()?)
    }

    pub(crate) fn weather(&self) -> &OpenWeatherClient {
        &self.weather
    }

    /// Searches places by name.
    ///
    /// This method uses a builder pattern.
    ///
    /// * `.query(&str)`: **Required.** Place name; fewer than two characters
    ///   returns an empty list without a request.
    /// * `.limit(usize)`: Optional. Maximum number of results. Defaults to `5`.
    /// * `.near(Coordinate)`: Optional. Sorts results by distance from this point,
    ///   closest first. Without it the geocoder's order is kept.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use mausam::{Mausam, MausamError, Location};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MausamError> {
    /// let client = Mausam::from_env()?;
    /// let current = Location::default();
    ///
    /// let results = client
    ///     .search()
    ///     .query("Aurangabad")
    ///     .near(current.coordinate)
    ///     .call()
    ///     .await?;
    /// for location in &results {
    ///     println!("{}", location.display_name());
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn search(
        &self,
        query: &str,
        limit: Option<usize>,
        near: Option<Coordinate>,
    ) -> Result<Vec<Location>, MausamError> {
        let limit = limit.unwrap_or(DEFAULT_SEARCH_LIMIT);
        let locations = self.weather.geocode(query, limit).await?;
        Ok(match near {
            Some(origin) => rank_by_distance(origin, locations)
                .into_iter()
                .map(|(location, _)| location)
                .collect(),
            None => locations,
        })
    }

    /// Current weather for `location`, flagged when the provider answered for
    /// a station with another name or more than 2 km away.
    pub async fn current(&self, location: &Location) -> Result<CurrentReport, MausamError> {
        let weather = self.weather.current_weather(location.coordinate).await?;
        let mismatch = station_mismatch(location, &weather.station_name, weather.station_coordinate);
        if let Some(m) = &mismatch {
            info!(
                "Weather for '{}' comes from '{}' ({:.1} km away)",
                location.city, m.station_name, m.distance_km
            );
        }
        Ok(CurrentReport { weather, mismatch })
    }

    /// Builder for the daily and hourly forecast views. See [`ForecastClient`].
    pub fn forecast(&self) -> ForecastClient<'_> {
        ForecastClient::new(self)
    }

    pub async fn air_quality(&self, coordinate: Coordinate) -> Result<AirQualityReport, MausamError> {
        Ok(self.weather.air_quality(coordinate).await?)
    }

    /// Gathers the snapshot advisory rules are evaluated against.
    ///
    /// Current weather is required. UV index and AQI are fetched concurrently
    /// with it; if either request fails the field is left empty and the
    /// failure is logged.
    pub async fn conditions(&self, coordinate: Coordinate) -> Result<ConditionSnapshot, MausamError> {
        let (current, one_call, air) = tokio::join!(
            self.weather.current_weather(coordinate),
            self.weather.one_call(coordinate),
            self.weather.air_quality(coordinate),
        );
        let current = current?;

        let uv_index = match one_call {
            Ok(one_call) => one_call.uv_index(),
            Err(e) => {
                warn!("UV index unavailable for {}: {}", coordinate, e);
                None
            }
        };
        let aqi = match air {
            Ok(report) => Some(report.aqi),
            Err(e) => {
                warn!("Air quality unavailable for {}: {}", coordinate, e);
                None
            }
        };

        Ok(ConditionSnapshot::new(
            current.temp_c,
            current.humidity_pct,
            current.wind_speed,
            current.condition_code,
        )
        .with_uv_index(uv_index)
        .with_aqi(aqi))
    }

    /// Tips that apply to the current conditions at `coordinate`, in display order.
    pub async fn advisories(&self, coordinate: Coordinate) -> Result<Vec<&'static str>, MausamError> {
        let snapshot = self.conditions(coordinate).await?;
        Ok(select_advisories(&snapshot, ADVISORY_RULES))
    }

    /// UV and air quality buckets for the health tab. Each part is empty when
    /// its request fails; the activity suggestion needs both.
    pub async fn health(&self, coordinate: Coordinate) -> Result<HealthReport, MausamError> {
        let (one_call, air) = tokio::join!(
            self.weather.one_call(coordinate),
            self.weather.air_quality(coordinate),
        );
        let uv_index = one_call
            .map_err(|e| warn!("UV index unavailable for {}: {}", coordinate, e))
            .ok()
            .and_then(|o| o.uv_index());
        let aqi = air
            .map_err(|e| warn!("Air quality unavailable for {}: {}", coordinate, e))
            .ok()
            .map(|r| r.aqi);

        let suggestion = match (uv_index, aqi) {
            (Some(uv), Some(aqi)) => Some(activity_suggestion(uv, aqi)),
            _ => None,
        };
        Ok(HealthReport {
            uv_index,
            uv: uv_index.map(classify_uv),
            aqi,
            air: aqi.map(classify_aqi),
            suggestion,
        })
    }

    /// Precipitation for the next 60 minutes.
    ///
    /// # Errors
    ///
    /// Fails with [`crate::ProviderError::MissingField`] where the provider
    /// has no per-minute data.
    pub async fn minute_cast(&self, coordinate: Coordinate) -> Result<MinuteCast, MausamError> {
        Ok(self.weather.one_call(coordinate).await?.minute_cast()?)
    }

    pub async fn sky(&self, coordinate: Coordinate) -> Result<SkyReport, MausamError> {
        Ok(self.weather.one_call(coordinate).await?.sky())
    }

    fn summary_client(&self) -> Result<&SummaryClient, MausamError> {
        self.summary.as_ref().ok_or(MausamError::SummaryDisabled)
    }

    /// AI-written summary of the current weather at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`MausamError::SummaryDisabled`] when no Gemini key is configured.
    pub async fn summary(&self, location: &Location) -> Result<String, MausamError> {
        let summary = self.summary_client()?;
        let weather = self.weather.current_weather(location.coordinate).await?;
        let prompt = location_prompt(location, &weather)?;
        Ok(summary.generate(&prompt).await?)
    }

    /// Weather at the capital of an Indian state or union territory, with an
    /// AI summary of news and alerts for the state.
    ///
    /// # Errors
    ///
    /// Returns [`MausamError::UnknownState`] if `state` is not in
    /// [`crate::STATE_CAPITALS`], and [`MausamError::SummaryDisabled`] when no
    /// Gemini key is configured.
    pub async fn state_bulletin(&self, state: &str) -> Result<StateBulletin, MausamError> {
        let capital = capital_of(state).ok_or_else(|| MausamError::UnknownState(state.to_string()))?;
        let summary = self.summary_client()?;
        let weather = self
            .weather
            .current_weather_by_name(&format!("{},IN", capital))
            .await?;
        let prompt = state_prompt(state, &weather)?;
        let summary = summary.generate(&prompt).await?;
        Ok(StateBulletin {
            state: state.to_string(),
            capital,
            weather,
            summary,
        })
    }

    /// Travel season for today's date.
    pub fn season(&self) -> &'static SeasonProfile {
        season_today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::MoonPhase;
    use crate::ProviderError;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn config(server: &MockServer) -> MausamConfig {
        MausamConfig::builder()
            .openweather_api_key("owm-key")
            .openweather_base_url(server.uri())
            .gemini_api_key("gem-key")
            .gemini_base_url(server.uri())
            .build()
    }

    fn client(server: &MockServer) -> Mausam {
        Mausam::new(config(server)).unwrap()
    }

    fn current_body(name: &str, lat: f64, lon: f64, main: &str, temp: f64) -> serde_json::Value {
        json!({
            "coord": { "lat": lat, "lon": lon },
            "weather": [{ "main": main, "description": main.to_lowercase(), "icon": "01d" }],
            "main": { "temp": temp, "temp_min": temp - 1.0, "temp_max": temp + 1.0, "pressure": 1008, "humidity": 55 },
            "wind": { "speed": 3.0 },
            "dt": 1717410000,
            "sys": { "country": "IN" },
            "name": name
        })
    }

    async fn mount_current(server: &MockServer, body: serde_json::Value) {
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(server)
            .await;
    }

    async fn mount_failure(server: &MockServer, endpoint: &str) {
        Mock::given(method("GET"))
            .and(path(endpoint))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(server)
            .await;
    }

    async fn mount_one_call(server: &MockServer, uvi: f64) {
        Mock::given(method("GET"))
            .and(path("/data/3.0/onecall"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "current": { "uvi": uvi },
                "daily": [{ "sunrise": 1717371000, "sunset": 1717420800, "moon_phase": 0.1 }]
            })))
            .mount(server)
            .await;
    }

    async fn mount_air(server: &MockServer, aqi: i64) {
        Mock::given(method("GET"))
            .and(path("/data/2.5/air_pollution"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "list": [{ "dt": 1717410000, "main": { "aqi": aqi }, "components": { "pm2_5": 12.0 } }]
            })))
            .mount(server)
            .await;
    }

    #[test]
    fn test_summary_disabled_without_key() {
        let client = Mausam::new(MausamConfig::builder().openweather_api_key("k").build()).unwrap();
        assert!(client.summary.is_none());
        assert!(matches!(client.summary_client(), Err(MausamError::SummaryDisabled)));
    }

    #[tokio::test]
    async fn test_search_ranks_by_distance() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/geo/1.0/direct"))
            .and(query_param("limit", "5"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "name": "Aurangabad", "country": "IN", "state": "Maharashtra", "lat": 19.88, "lon": 75.34 },
                { "name": "Aurangabad", "country": "IN", "state": "Bihar", "lat": 24.75, "lon": 84.37 }
            ])))
            .mount(&server)
            .await;
        let client = client(&server);

        let unsorted = client.search().query("Aurangabad").call().await.unwrap();
        assert_eq!(unsorted[0].region.as_deref(), Some("Maharashtra"));

        let patna = Coordinate::new(25.59, 85.14).unwrap();
        let sorted = client
            .search()
            .query("Aurangabad")
            .near(patna)
            .call()
            .await
            .unwrap();
        assert_eq!(sorted[0].region.as_deref(), Some("Bihar"));
        assert_eq!(sorted.len(), 2);
    }

    #[tokio::test]
    async fn test_current_reports_station_mismatch() {
        let server = MockServer::start().await;
        mount_current(&server, current_body("Connaught Place", 28.63, 77.22, "Haze", 33.0)).await;
        let client = client(&server);

        let report = client.current(&Location::default()).await.unwrap();
        let mismatch = report.mismatch.unwrap();
        assert_eq!(mismatch.station_name, "Connaught Place");
        assert_eq!(report.weather.temp_c, 33.0);
    }

    #[tokio::test]
    async fn test_current_without_mismatch() {
        let server = MockServer::start().await;
        mount_current(&server, current_body("New Delhi", 28.6139, 77.209, "Clear", 30.0)).await;

        let report = client(&server).current(&Location::default()).await.unwrap();
        assert!(report.mismatch.is_none());
    }

    #[tokio::test]
    async fn test_conditions_combine_all_sources() {
        let server = MockServer::start().await;
        mount_current(&server, current_body("New Delhi", 28.6139, 77.209, "Clear", 34.0)).await;
        mount_one_call(&server, 9.5).await;
        mount_air(&server, 4).await;
        let client = client(&server);

        let snapshot = client.conditions(Location::default().coordinate).await.unwrap();
        assert_eq!(snapshot.uv_index, Some(9.5));
        assert_eq!(snapshot.aqi, Some(4));
        assert_eq!(snapshot.condition_code, "Clear");

        let tips = client.advisories(Location::default().coordinate).await.unwrap();
        assert!(tips.contains(&"Use sunscreen when UV is moderate or higher."));
        assert!(tips.contains(&"Limit outdoor activity when air quality is poor."));
        assert!(tips.contains(&"Keep pets safe and hydrated in hot weather."));
    }

    #[tokio::test]
    async fn test_conditions_degrade_when_uv_and_air_fail() {
        let server = MockServer::start().await;
        mount_current(&server, current_body("New Delhi", 28.6139, 77.209, "Clear", 20.0)).await;
        mount_failure(&server, "/data/3.0/onecall").await;
        mount_failure(&server, "/data/2.5/air_pollution").await;
        let client = client(&server);

        let snapshot = client.conditions(Location::default().coordinate).await.unwrap();
        assert_eq!(snapshot.uv_index, None);
        assert_eq!(snapshot.aqi, None);

        let tips = client.advisories(Location::default().coordinate).await.unwrap();
        assert!(!tips.contains(&"Use sunscreen when UV is moderate or higher."));
        assert!(!tips.contains(&"Wear a mask if pollen or pollution is high."));
    }

    #[tokio::test]
    async fn test_conditions_require_current_weather() {
        let server = MockServer::start().await;
        mount_failure(&server, "/data/2.5/weather").await;
        mount_one_call(&server, 3.0).await;
        mount_air(&server, 1).await;

        let err = client(&server)
            .conditions(Location::default().coordinate)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MausamError::Provider(ProviderError::HttpStatus { .. })
        ));
    }

    #[tokio::test]
    async fn test_health_report() {
        let server = MockServer::start().await;
        mount_one_call(&server, 2.0).await;
        mount_air(&server, 1).await;

        let health = client(&server).health(Location::default().coordinate).await.unwrap();
        assert_eq!(health.uv.unwrap().level, "Low");
        assert_eq!(health.air.unwrap().level, "Good");
        assert_eq!(
            health.suggestion.unwrap().text,
            "Great day for outdoor activities!"
        );
    }

    #[tokio::test]
    async fn test_health_without_air_has_no_suggestion() {
        let server = MockServer::start().await;
        mount_one_call(&server, 8.5).await;
        mount_failure(&server, "/data/2.5/air_pollution").await;

        let health = client(&server).health(Location::default().coordinate).await.unwrap();
        assert_eq!(health.uv.unwrap().level, "Very High");
        assert!(health.air.is_none());
        assert!(health.suggestion.is_none());
    }

    #[tokio::test]
    async fn test_sky_and_missing_minute_cast() {
        let server = MockServer::start().await;
        mount_one_call(&server, 1.0).await;
        let client = client(&server);

        let sky = client.sky(Location::default().coordinate).await.unwrap();
        assert_eq!(sky.moon_phase, Some(MoonPhase::WaxingCrescent));

        let err = client
            .minute_cast(Location::default().coordinate)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            MausamError::Provider(ProviderError::MissingField { field: "minutely", .. })
        ));
    }

    #[tokio::test]
    async fn test_summary_for_location() {
        let server = MockServer::start().await;
        mount_current(&server, current_body("New Delhi", 28.6139, 77.209, "Clear", 30.0)).await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Warm and clear." }] } }]
            })))
            .mount(&server)
            .await;

        let text = client(&server).summary(&Location::default()).await.unwrap();
        assert_eq!(text, "Warm and clear.");
    }

    #[tokio::test]
    async fn test_state_bulletin_queries_capital() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "Jaipur,IN"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(current_body("Jaipur", 26.91, 75.79, "Clear", 39.0)),
            )
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1beta/models/gemini-pro:generateContent"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "candidates": [{ "content": { "parts": [{ "text": "Heatwave alert." }] } }]
            })))
            .mount(&server)
            .await;

        let bulletin = client(&server).state_bulletin("rajasthan").await.unwrap();
        assert_eq!(bulletin.capital, "Jaipur");
        assert_eq!(bulletin.weather.station_name, "Jaipur");
        assert_eq!(bulletin.summary, "Heatwave alert.");
    }

    #[tokio::test]
    async fn test_state_bulletin_unknown_state() {
        let server = MockServer::start().await;
        let err = client(&server).state_bulletin("Gondwana").await.unwrap_err();
        assert!(matches!(err, MausamError::UnknownState(s) if s == "Gondwana"));
    }
}
