//! Provides the `ForecastClient` for requesting the daily and hourly forecast views.
//!
//! This client acts as an intermediate builder, obtained via [`Mausam::forecast()`],
//! allowing the user to pick the view and its length before executing the request.

use crate::forecast::{DAILY_OUTLOOK_DAYS, HOURLY_OUTLOOK_SAMPLES};
use crate::{Coordinate, DayAggregate, HourlyPoint, Mausam, MausamError};
use bon::bon;

/// A client builder for the forecast views.
///
/// Instances are created by calling [`Mausam::forecast()`]. Both views come
/// from the same 5-day/3-hour provider forecast; the daily view groups it by
/// calendar day in the location's time zone.
pub struct ForecastClient<'a> {
    client: &'a Mausam,
}

#[bon]
impl<'a> ForecastClient<'a> {
    pub(crate) fn new(client: &'a Mausam) -> Self {
        Self { client }
    }

    /// Fetches the per-day forecast for a coordinate.
    ///
    /// Optionally set `.days(usize)` (default: 5). Days are ordered as they
    /// appear in the forecast, and the first day may be partial.
    ///
    /// # Errors
    ///
    /// Returns [`MausamError::Provider`] if the forecast request fails or its
    /// body cannot be decoded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mausam::{Coordinate, Mausam, MausamError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), MausamError> {
    /// let client = Mausam::from_env()?;
    /// let pune = Coordinate::new(18.5204, 73.8567)?;
    ///
    /// let days = client.forecast().daily(pune).days(3).call().await?;
    /// for day in &days {
    ///     println!("{}: {:.0}°C / {:.0}°C, {}", day.label, day.max_temp_c, day.min_temp_c, day.description);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder(start_fn = daily)]
    #[doc(hidden)]
    pub async fn build_daily(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        days: Option<usize>,
    ) -> Result<Vec<DayAggregate>, MausamError> {
        let forecast = self.client.weather().forecast(coordinate).await?;
        Ok(forecast.days(days.unwrap_or(DAILY_OUTLOOK_DAYS)))
    }

    /// Fetches the hourly view: the first raw 3-hour samples of the forecast.
    ///
    /// Optionally set `.samples(usize)` (default: 8, i.e. the next 24 hours).
    #[builder(start_fn = hourly)]
    #[doc(hidden)]
    pub async fn build_hourly(
        &self,
        #[builder(start_fn)] coordinate: Coordinate,
        samples: Option<usize>,
    ) -> Result<Vec<HourlyPoint>, MausamError> {
        let forecast = self.client.weather().forecast(coordinate).await?;
        Ok(forecast.hours(samples.unwrap_or(HOURLY_OUTLOOK_SAMPLES)))
    }
}
