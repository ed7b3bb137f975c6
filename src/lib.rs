mod advisory;
mod classify;
mod clients;
mod config;
mod error;
mod forecast;
mod geo;
mod mausam;
mod provider;
mod regions;
mod season;
mod types;

pub use error::MausamError;
pub use mausam::*;

pub use clients::forecast_client::*;
pub use config::*;

pub use advisory::*;
pub use classify::*;
pub use forecast::*;
pub use geo::*;
pub use regions::*;
pub use season::*;

pub use provider::error::ProviderError;
pub use provider::openweather::*;
pub use provider::summary::*;

pub use types::condition::*;
pub use types::coordinate::*;
pub use types::reports::*;
pub use types::sample::*;
pub use types::weather_condition::WeatherCondition;
