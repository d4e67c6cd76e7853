//! Stream Ingest Example
//!
//! This example demonstrates the ingest seam: draining a reading stream
//! into the processor cycle by cycle, the way the dashboard poll loop
//! does, with malformed readings skipped along the way.
//!
//! ## What You'll Learn
//!
//! - Replaying recorded telemetry through `MemoryStream`
//! - Running fetch-and-append cycles with a budgeted `Ingestor`
//! - How non-finite readings are skipped instead of poisoning charts
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_stream_ingest
//! ```

use agrisense_core::stream::{Ingestor, MemoryStream};
use agrisense_core::{Metric, Reading, SeriesProcessor};

fn main() {
    println!("AgriSense Stream Ingest Example");
    println!("===============================\n");

    // A recorded telemetry session. One reading is corrupt: the nitrogen
    // probe reported NaN at t=4000.
    let recorded = [
        soil_reading(1_000, 6.4, 42.0),
        soil_reading(2_000, 6.5, 44.0),
        soil_reading(3_000, 6.5, 45.0),
        Reading::new(4_000)
            .with(Metric::Ph, 6.6)
            .with(Metric::Nitrogen, f32::NAN),
        soil_reading(5_000, 6.7, 47.0),
        soil_reading(6_000, 6.8, 49.0),
        soil_reading(7_000, 6.9, 52.0),
    ];

    let mut stream = MemoryStream::new(&recorded);
    let mut processor = SeriesProcessor::new();

    // Small budget to show multi-cycle draining; the real poll loop runs
    // one cycle per timer tick.
    let ingestor = Ingestor::with_budget(3);

    let mut cycle = 0;
    while !stream.is_exhausted() {
        cycle += 1;
        match ingestor.ingest(&mut stream, &mut processor) {
            Ok(stats) => println!(
                "Cycle {}: ingested {}, skipped {}",
                cycle, stats.ingested, stats.skipped
            ),
            Err(e) => {
                println!("Cycle {}: transport failure: {:?}", cycle, e);
                break;
            }
        }
    }
    println!();

    // The skipped reading never reached the processor.
    let nitrogen = processor.window_for(Metric::Nitrogen);
    println!("Nitrogen window ({} points): {:?}", nitrogen.len(), &nitrogen[..]);

    for metric in [Metric::Ph, Metric::Nitrogen] {
        match processor.latest_advice(metric) {
            Ok(advice) => println!("{}", advice),
            Err(e) => println!("{}: advisory unavailable: {}", metric.name(), e),
        }
    }
}

fn soil_reading(timestamp: u64, ph: f32, nitrogen: f32) -> Reading {
    Reading::new(timestamp)
        .with(Metric::Ph, ph)
        .with(Metric::Nitrogen, nitrogen)
}
