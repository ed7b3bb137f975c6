use crate::config::MausamConfig;
use crate::error::MausamError;
use crate::provider::error::ProviderError;
use crate::provider::fetch_json;
use crate::provider::responses::{GeminiRequest, GeminiResponse};
use crate::types::coordinate::Location;
use crate::types::reports::CurrentWeather;
use log::info;
use reqwest::Client;

/// Returned by [`SummaryClient::generate`] when the model produced no text.
pub const NO_SUMMARY: &str = "No AI summary available.";

/// Client for Gemini's `generateContent` endpoint.
#[derive(Clone)]
pub struct SummaryClient {
    http: Client,
    api_key: String,
    url: String,
}

impl SummaryClient {
    /// Fails with [`MausamError::SummaryDisabled`] when no Gemini key is configured.
    pub fn new(config: &MausamConfig) -> Result<Self, MausamError> {
        let api_key = config
            .gemini_api_key
            .clone()
            .ok_or(MausamError::SummaryDisabled)?;
        Ok(Self {
            http: crate::provider::http_client(config.request_timeout)?,
            api_key,
            url: format!(
                "{}/v1beta/models/{}:generateContent",
                config.gemini_base_url.trim_end_matches('/'),
                config.gemini_model
            ),
        })
    }

    /// Sends `prompt` and returns the first text part of the first candidate,
    /// or [`NO_SUMMARY`] when there is none.
    pub async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = self
            .http
            .post(&self.url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GeminiRequest::new(prompt));
        let response: GeminiResponse = fetch_json(request, &self.url).await?;
        let text = response.first_text().filter(|t| !t.trim().is_empty());
        info!(
            "Summary request to {} returned {}",
            self.url,
            if text.is_some() { "text" } else { "no text" }
        );
        Ok(text.unwrap_or_else(|| NO_SUMMARY.to_string()))
    }
}

/// Prompt asking for a friendly summary of the weather at `location`.
pub fn location_prompt(location: &Location, weather: &CurrentWeather) -> Result<String, MausamError> {
    Ok(format!(
        "You are a helpful weather assistant. Given the following weather data for {}, {}, \
         provide a friendly, concise summary and any relevant tips or warnings.\n\nWeather data: {}",
        location.city,
        location.country,
        serde_json::to_string(weather)?
    ))
}

/// Prompt asking for weather news and alerts for an Indian state.
pub fn state_prompt(state: &str, weather: &CurrentWeather) -> Result<String, MausamError> {
    Ok(format!(
        "Summarize the current weather, top weather news, and any weather alerts for {}, India.\
         \n\nWeather data: {}",
        state,
        serde_json::to_string(weather)?
    ))
}
