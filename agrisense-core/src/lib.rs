//! Telemetry series engine for AgriSense
//!
//! Turns the stream of readings coming off a farm telemetry gateway into
//! chart-ready output: a bounded recent-history window per metric, a
//! trailing moving average for display smoothing, suitability
//! classification against agronomic bands, and integer-aligned axis
//! bounds that frame the data with margin.
//!
//! Key constraints:
//! - Runs on edge gateways as well as hosted dashboards (no_std capable)
//! - No heap allocation in the processing path
//! - Typed, recoverable errors across the renderer boundary
//!
//! ```
//! use agrisense_core::{Metric, Reading, SeriesProcessor};
//!
//! let mut processor = SeriesProcessor::new();
//! processor.push(Reading::new(1_000).with(Metric::Humidity, 72.0));
//!
//! match processor.latest_advice(Metric::Humidity) {
//!     Ok(advice) => { let _ = advice; } // render advisory
//!     Err(_) => {}                      // render loading placeholder
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod buffer;
pub mod constants;
pub mod errors;
pub mod metric;
pub mod processor;
pub mod reading;
pub mod series;
pub mod stream;
pub mod suitability;
pub mod time;

// Public API
pub use errors::{TelemetryError, TelemetryResult};
pub use metric::Metric;
pub use processor::SeriesProcessor;
pub use reading::Reading;
pub use series::{AxisBounds, MetricSeries};
pub use suitability::{Advice, Suitability, SuitabilityRange};

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_exists() {
        assert!(!VERSION.is_empty());
    }
}
