use crate::provider::error::ProviderError;
use crate::types::coordinate::InvalidCoordinate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MausamError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinate),

    #[error("Required environment variable '{0}' is not set")]
    MissingEnvVar(&'static str),

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),

    #[error("AI summaries are disabled: no Gemini API key configured")]
    SummaryDisabled,

    #[error("Unknown Indian state or union territory '{0}'")]
    UnknownState(String),

    #[error("Failed to encode weather data for the summary prompt")]
    PromptEncoding(#[from] serde_json::Error),
}
