//! Groups 3-hourly forecast samples into calendar days and builds the hourly view.

use crate::types::sample::{DayAggregate, HourlyPoint, SampleInterval};
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use log::warn;
use std::collections::HashMap;
use std::fmt::Display;

/// Number of days shown by the daily forecast view.
pub const DAILY_OUTLOOK_DAYS: usize = 5;
/// Samples shown by the 24-hour view (3-hour spacing).
pub const HOURLY_OUTLOOK_SAMPLES: usize = 8;

/// Groups samples by their calendar date in the host's local time zone.
///
/// See [`aggregate_by_day_in`].
pub fn aggregate_by_day(samples: &[SampleInterval]) -> Vec<DayAggregate> {
    aggregate_by_day_in(samples, &Local)
}

/// Groups samples by their calendar date in `tz` and rolls each group up.
///
/// Days appear in the order their first sample appears in `samples`. For each
/// day the minimum of `temp_min_c`, the maximum of `temp_max_c`, the summed
/// precipitation (missing counts as 0) and the peak wind speed are computed.
/// Label, icon and description come from the day's earliest sample.
///
/// An empty input yields an empty output. Samples whose timestamp cannot be
/// represented as a date are skipped.
///
/// # Examples
///
/// ```
/// use chrono::Utc;
/// use mausam::{aggregate_by_day_in, SampleInterval};
///
/// let sample = |timestamp: i64, min: f64, max: f64| SampleInterval {
///     timestamp,
///     temp_c: (min + max) / 2.0,
///     temp_min_c: min,
///     temp_max_c: max,
///     wind_speed: 3.0,
///     precipitation_mm: None,
///     condition_code: "Clear".into(),
///     condition_description: "clear sky".into(),
///     icon_code: "01d".into(),
/// };
///
/// // 2024-06-03 00:00 and 03:00 UTC, then 2024-06-04 00:00 UTC.
/// let days = aggregate_by_day_in(
///     &[sample(1_717_372_800, 20.0, 30.0), sample(1_717_383_600, 18.0, 31.0), sample(1_717_459_200, 22.0, 29.0)],
///     &Utc,
/// );
/// assert_eq!(days.len(), 2);
/// assert_eq!(days[0].label, "Mon");
/// assert_eq!((days[0].min_temp_c, days[0].max_temp_c), (18.0, 31.0));
/// ```
pub fn aggregate_by_day_in<Tz: TimeZone>(samples: &[SampleInterval], tz: &Tz) -> Vec<DayAggregate> {
    let mut day_index: HashMap<NaiveDate, usize> = HashMap::new();
    let mut groups: Vec<(NaiveDate, Vec<&SampleInterval>)> = Vec::new();

    for sample in samples {
        let Some(local) = local_time(sample.timestamp, tz) else {
            warn!(
                "Skipping forecast sample with unrepresentable timestamp {}",
                sample.timestamp
            );
            continue;
        };
        let date = local.date_naive();
        match day_index.get(&date) {
            Some(&i) => groups[i].1.push(sample),
            None => {
                day_index.insert(date, groups.len());
                groups.push((date, vec![sample]));
            }
        }
    }

    groups
        .into_iter()
        .filter_map(|(date, group)| summarize_day(date, &group))
        .collect()
}

fn summarize_day(date: NaiveDate, group: &[&SampleInterval]) -> Option<DayAggregate> {
    // min_by_key returns the first of equal minima, so ties keep input order.
    let first = *group.iter().min_by_key(|s| s.timestamp)?;

    let mut min_temp_c = f64::INFINITY;
    let mut max_temp_c = f64::NEG_INFINITY;
    let mut total_precipitation_mm = 0.0;
    let mut max_wind_speed = f64::NEG_INFINITY;
    for sample in group {
        min_temp_c = min_temp_c.min(sample.temp_min_c);
        max_temp_c = max_temp_c.max(sample.temp_max_c);
        total_precipitation_mm += sample.precipitation_mm.unwrap_or(0.0);
        max_wind_speed = max_wind_speed.max(sample.wind_speed);
    }

    Some(DayAggregate {
        date,
        label: date.format("%a").to_string(),
        min_temp_c,
        max_temp_c,
        total_precipitation_mm,
        max_wind_speed,
        icon_code: first.icon_code.clone(),
        condition_code: first.condition_code.clone(),
        description: first.condition_description.clone(),
    })
}

/// The first `count` samples as rows of the hourly view, labelled in `tz`.
pub fn hourly_outlook<Tz: TimeZone>(
    samples: &[SampleInterval],
    count: usize,
    tz: &Tz,
) -> Vec<HourlyPoint>
where
    Tz::Offset: Display,
{
    samples
        .iter()
        .take(count)
        .filter_map(|sample| {
            let local = local_time(sample.timestamp, tz)?;
            Some(HourlyPoint {
                timestamp: sample.timestamp,
                time_label: local.format("%H:%M").to_string(),
                temp_c: sample.temp_c,
                wind_speed: sample.wind_speed,
                rain_mm: sample.precipitation_mm.unwrap_or(0.0),
            })
        })
        .collect()
}

fn local_time<Tz: TimeZone>(timestamp: i64, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.timestamp_opt(timestamp, 0).single()
}
