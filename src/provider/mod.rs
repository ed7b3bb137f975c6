//! HTTP adapters for the weather (OpenWeatherMap) and summary (Gemini) providers.

pub mod error;
pub mod openweather;
pub(crate) mod responses;
pub mod summary;

use crate::error::MausamError;
use crate::provider::error::ProviderError;
use log::{debug, warn};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub(crate) fn http_client(timeout: Duration) -> Result<Client, MausamError> {
    Client::builder()
        .timeout(timeout)
        .build()
        .map_err(MausamError::HttpClient)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    message: Option<String>,
}

/// Best-effort human-readable message from an error response body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message.or(b.error.and_then(|e| e.message)))
        .unwrap_or_else(|| body.trim().to_string())
}

/// Sends `request` and decodes the JSON body. `url` is the endpoint without
/// query string and is what ends up in errors and logs.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    request: RequestBuilder,
    url: &str,
) -> Result<T, ProviderError> {
    debug!("Requesting {}", url);
    let response = request
        .send()
        .await
        .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e.without_url()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| ProviderError::NetworkRequest(url.to_string(), e.without_url()))?;

    if !status.is_success() {
        let message = error_message(&body);
        warn!("HTTP error for {}: {} {}", url, status, message);
        return Err(ProviderError::HttpStatus {
            url: url.to_string(),
            status,
            message,
        });
    }

    serde_json::from_str(&body).map_err(|e| ProviderError::JsonParse(url.to_string(), e))
}
