//! Prints a text version of the weather dashboard for one place.
//!
//! Needs `MAUSAM_OWM_API_KEY` (and optionally `MAUSAM_GEMINI_API_KEY`) in the
//! environment or a `.env` file. Set `RUST_LOG=info` to see provider requests.
//!
//! cargo run --example dashboard -- Pune

use mausam::{
    condition_activity, weather_fact, Location, Mausam, MausamError, MinuteCast, Pollutant,
};
use std::env;

#[tokio::main]
async fn main() -> Result<(), MausamError> {
    env_logger::init();
    let client = Mausam::from_env()?;

    let location = match env::args().nth(1) {
        Some(query) => client
            .search()
            .query(&query)
            .near(Location::default().coordinate)
            .call()
            .await?
            .into_iter()
            .next()
            .unwrap_or_default(),
        None => Location::default(),
    };
    let coordinate = location.coordinate;
    println!("=== {} ({}) ===", location.display_name(), coordinate);

    let current = client.current(&location).await?;
    let weather = &current.weather;
    println!(
        "{:.1}°C, {} | humidity {}% | wind {} m/s",
        weather.temp_c, weather.description, weather.humidity_pct, weather.wind_speed
    );
    if let Some(mismatch) = &current.mismatch {
        println!(
            "Note: showing weather for {} ({:.1} km away)",
            mismatch.station_name, mismatch.distance_km
        );
    }

    println!("\n--- Next 24 hours ---");
    for point in client.forecast().hourly(coordinate).call().await? {
        println!("{}  {:>5.1}°C  {:.1} mm", point.time_label, point.temp_c, point.rain_mm);
    }

    println!("\n--- 5 day forecast ---");
    for day in client.forecast().daily(coordinate).call().await? {
        println!(
            "{}  {:>5.1} / {:>5.1}°C  {:>4.1} mm  {}",
            day.label, day.max_temp_c, day.min_temp_c, day.total_precipitation_mm, day.description
        );
    }

    match client.air_quality(coordinate).await {
        Ok(air) => {
            println!("\n--- Air quality: AQI {} ---", air.aqi);
            for pollutant in Pollutant::ALL {
                if let Some(value) = pollutant.value(&air.pollutants) {
                    println!("{:<7} {:>7.1} µg/m³  {}", pollutant.label(), value, pollutant.description());
                }
            }
        }
        Err(e) => println!("\nAir quality unavailable: {}", e),
    }

    let health = client.health(coordinate).await?;
    if let Some(uv) = health.uv {
        println!("\nUV: {} ({})", uv.level, uv.advice);
    }
    if let Some(suggestion) = health.suggestion {
        println!("{} {}", suggestion.icon, suggestion.text);
    }

    match client.minute_cast(coordinate).await {
        Ok(cast) if cast.has_precipitation() => {
            for (i, minute) in cast.minutes.iter().enumerate().filter(|(_, m)| m.precipitation_mm > 0.0) {
                println!("{}: {:.2} mm", MinuteCast::minute_label(i), minute.precipitation_mm);
            }
        }
        Ok(_) => println!("\nNo precipitation expected in the next hour."),
        Err(e) => println!("\nMinute forecast unavailable: {}", e),
    }

    let snapshot = client.conditions(coordinate).await?;
    println!("\n--- Tips ---");
    for tip in mausam::select_advisories(&snapshot, mausam::ADVISORY_RULES) {
        println!("- {}", tip);
    }
    println!("\n{}", condition_activity(Some(&snapshot)));

    if let Ok(sky) = client.sky(coordinate).await {
        if let Some(phase) = sky.moon_phase {
            println!("Moon: {}", phase);
        }
    }

    let season = client.season();
    println!("\n--- {} travel ideas ---\n{}", season.name, season.description);
    for destination in season.destinations {
        println!("- {}", destination);
    }

    match client.summary(&location).await {
        Ok(text) => println!("\n--- AI summary ---\n{}", text),
        Err(MausamError::SummaryDisabled) => {}
        Err(e) => println!("\nAI summary failed: {}", e),
    }

    println!("\n{}", weather_fact(0));
    Ok(())
}
