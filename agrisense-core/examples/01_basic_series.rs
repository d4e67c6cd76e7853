//! Basic Series Processing Example
//!
//! This example demonstrates the simplest use case of AgriSense:
//! feeding sensor readings to the series processor and reading back
//! chart-ready output and advisories.
//!
//! ## What You'll Learn
//!
//! - Building readings and appending them to a processor
//! - Getting the smoothed, classified series for a metric
//! - Interpreting latest-reading advisories
//! - Handling the loading state before data arrives
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_series
//! ```

use agrisense_core::{Metric, Reading, SeriesProcessor, TelemetryError};

fn main() {
    println!("AgriSense Basic Series Example");
    println!("==============================\n");

    let mut processor = SeriesProcessor::new();

    // Before any data arrives, derivations report InsufficientData and
    // the dashboard renders its loading placeholder.
    match processor.latest_advice(Metric::Humidity) {
        Err(TelemetryError::InsufficientData { .. }) => {
            println!("No data yet: Loading data...\n");
        }
        other => println!("Unexpected state: {:?}\n", other),
    }

    // Simulate a minute of humidity drifting out of its optimal band
    // (60-85%), sampled once per second.
    println!("Appending humidity readings:");
    let samples = [70.0, 71.0, 72.0, 74.0, 78.0, 83.0, 88.0, 92.0, 95.0];
    for (i, humidity) in samples.iter().enumerate() {
        let timestamp = 1_000 * (i as u64 + 1);
        processor.push(
            Reading::new(timestamp)
                .with(Metric::Humidity, *humidity)
                .with(Metric::Temperature, 31.0),
        );
        println!("  t={:4}ms: {:.1}%", timestamp, humidity);
    }
    println!();

    // The chart payload: smoothed points, per-point suitability, and an
    // integer-aligned frame with 20% margin.
    let series = processor
        .series(Metric::Humidity)
        .expect("samples were appended");

    println!("Chart series for humidity:");
    println!("  Y axis: {} to {}", series.bounds.min, series.bounds.max);
    let labels = series.labels();
    for (i, value) in series.smoothed.iter().enumerate() {
        println!(
            "  {} -> {:6.2}% [{:?}]",
            labels[i], value, series.suitability[i]
        );
    }
    println!();

    // The advisory follows the latest raw reading.
    match processor.latest_advice(Metric::Humidity) {
        Ok(advice) => println!("Advisory: {}", advice),
        Err(e) => println!("Advisory unavailable: {}", e),
    }

    match processor.latest_advice(Metric::Temperature) {
        Ok(advice) => println!("Advisory: {}", advice),
        Err(e) => println!("Advisory unavailable: {}", e),
    }
}
