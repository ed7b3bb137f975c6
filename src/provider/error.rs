use crate::types::coordinate::InvalidCoordinate;
use thiserror::Error;

/// Failures talking to a remote provider. URLs never include query strings,
/// so API keys do not leak into messages or logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}: {message}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        message: String,
    },

    #[error("Failed to decode response from {0}")]
    JsonParse(String, #[source] serde_json::Error),

    #[error("Response from {url} is missing '{field}'")]
    MissingField { url: String, field: &'static str },

    #[error("Provider returned an invalid coordinate")]
    InvalidCoordinate(#[from] InvalidCoordinate),
}
