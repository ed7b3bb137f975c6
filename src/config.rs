use crate::error::MausamError;
use bon::Builder;
use log::debug;
use std::env;
use std::time::Duration;

pub const DEFAULT_OPENWEATHER_BASE_URL: &str = "https://api.openweathermap.org";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-pro";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Keys and endpoints for the weather and summary providers.
///
/// ```
/// use mausam::MausamConfig;
/// use std::time::Duration;
///
/// let config = MausamConfig::builder()
///     .openweather_api_key("owm-key")
///     .request_timeout(Duration::from_secs(5))
///     .build();
/// assert_eq!(config.openweather_base_url, "https://api.openweathermap.org");
/// assert!(config.gemini_api_key.is_none());
/// ```
#[derive(Debug, Clone, Builder)]
pub struct MausamConfig {
    #[builder(into)]
    pub openweather_api_key: String,
    #[builder(into, default = DEFAULT_OPENWEATHER_BASE_URL.to_string())]
    pub openweather_base_url: String,
    /// AI summaries are disabled when unset.
    #[builder(into)]
    pub gemini_api_key: Option<String>,
    #[builder(into, default = DEFAULT_GEMINI_BASE_URL.to_string())]
    pub gemini_base_url: String,
    #[builder(into, default = DEFAULT_GEMINI_MODEL.to_string())]
    pub gemini_model: String,
    #[builder(default = DEFAULT_REQUEST_TIMEOUT)]
    pub request_timeout: Duration,
}

pub const ENV_OPENWEATHER_API_KEY: &str = "MAUSAM_OWM_API_KEY";
pub const ENV_OPENWEATHER_BASE_URL: &str = "MAUSAM_OWM_BASE_URL";
pub const ENV_GEMINI_API_KEY: &str = "MAUSAM_GEMINI_API_KEY";
pub const ENV_GEMINI_BASE_URL: &str = "MAUSAM_GEMINI_BASE_URL";
pub const ENV_GEMINI_MODEL: &str = "MAUSAM_GEMINI_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "MAUSAM_TIMEOUT_SECS";

impl MausamConfig {
    /// Reads the configuration from `MAUSAM_*` environment variables, after
    /// loading a `.env` file from the working directory if one exists.
    ///
    /// Only `MAUSAM_OWM_API_KEY` is required. An unparsable
    /// `MAUSAM_TIMEOUT_SECS` falls back to the default timeout.
    pub fn from_env() -> Result<Self, MausamError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {:?}", path),
            Err(e) => debug!("No .env file loaded: {}", e),
        }
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, MausamError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openweather_api_key = non_empty(ENV_OPENWEATHER_API_KEY)
            .ok_or(MausamError::MissingEnvVar(ENV_OPENWEATHER_API_KEY))?;
        let request_timeout = non_empty(ENV_TIMEOUT_SECS)
            .and_then(|v| v.trim().parse::<u64>().ok())
            .map(Duration::from_secs);

        Ok(Self::builder()
            .openweather_api_key(openweather_api_key)
            .maybe_gemini_api_key(non_empty(ENV_GEMINI_API_KEY))
            .maybe_openweather_base_url(non_empty(ENV_OPENWEATHER_BASE_URL))
            .maybe_gemini_base_url(non_empty(ENV_GEMINI_BASE_URL))
            .maybe_gemini_model(non_empty(ENV_GEMINI_MODEL))
            .maybe_request_timeout(request_timeout)
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = MausamConfig::from_lookup(lookup(&[(ENV_OPENWEATHER_API_KEY, "abc")])).unwrap();
        assert_eq!(config.openweather_api_key, "abc");
        assert_eq!(config.openweather_base_url, DEFAULT_OPENWEATHER_BASE_URL);
        assert_eq!(config.gemini_base_url, DEFAULT_GEMINI_BASE_URL);
        assert_eq!(config.gemini_model, DEFAULT_GEMINI_MODEL);
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
        assert!(config.gemini_api_key.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = MausamConfig::from_lookup(lookup(&[
            (ENV_OPENWEATHER_API_KEY, "abc"),
            (ENV_OPENWEATHER_BASE_URL, "http://localhost:9000"),
            (ENV_GEMINI_API_KEY, "gem"),
            (ENV_GEMINI_MODEL, "gemini-1.5-flash"),
            (ENV_TIMEOUT_SECS, "3"),
        ]))
        .unwrap();
        assert_eq!(config.openweather_base_url, "http://localhost:9000");
        assert_eq!(config.gemini_api_key.as_deref(), Some("gem"));
        assert_eq!(config.gemini_model, "gemini-1.5-flash");
        assert_eq!(config.request_timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_missing_key() {
        let err = MausamConfig::from_lookup(lookup(&[(ENV_OPENWEATHER_API_KEY, "  ")])).unwrap_err();
        assert!(matches!(err, MausamError::MissingEnvVar(ENV_OPENWEATHER_API_KEY)));
    }

    #[test]
    fn test_bad_timeout_uses_default() {
        let config = MausamConfig::from_lookup(lookup(&[
            (ENV_OPENWEATHER_API_KEY, "abc"),
            (ENV_TIMEOUT_SECS, "soon"),
        ]))
        .unwrap();
        assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    }
}
