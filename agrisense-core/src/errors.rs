//! Error Types for Telemetry Series Processing
//!
//! ## Design Philosophy
//!
//! The error system follows the same rules as the rest of the crate:
//!
//! 1. **Small Size**: Each variant keeps its payload inline (a couple of
//!    machine words) since errors are returned from hot derivation paths.
//!
//! 2. **No Heap Allocation**: No `String` anywhere - error data is numeric
//!    or absent, so the enum works identically on no_std gateways.
//!
//! 3. **Copy Semantics**: Errors implement `Copy` so they can be returned
//!    and stored without move-semantics friction.
//!
//! 4. **Recoverable Conditions**: Every variant describes a local condition
//!    the renderer can translate into a user-visible fallback (a loading
//!    placeholder, a skipped chart, a sensor-fault badge). Nothing here is
//!    fatal to the dashboard session.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use agrisense_core::{Metric, SeriesProcessor, TelemetryError};
//!
//! fn render_advisory(processor: &SeriesProcessor, metric: Metric) {
//!     match processor.latest_advice(metric) {
//!         Ok(_advice) => {
//!             // Show the advisory text
//!         }
//!         Err(TelemetryError::InsufficientData { .. }) => {
//!             // No readings yet - show "Loading data..."
//!         }
//!         Err(TelemetryError::InvalidValue { .. }) => {
//!             // Sensor reported garbage - show a fault badge
//!         }
//!         Err(_) => {
//!             // Other conditions - skip the widget
//!         }
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Telemetry processing errors - kept small and recoverable
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum TelemetryError {
    /// Not enough readings to derive the requested output
    #[error("Insufficient data: need {required}, have {available}")]
    InsufficientData {
        /// Minimum number of readings the derivation needs
        required: usize,
        /// Readings currently held
        available: usize,
    },

    /// Metric name outside the fixed telemetry set
    #[error("Unknown metric name")]
    InvalidMetric,

    /// Value unusable for comparison (NaN or infinite)
    #[error("Invalid value: {value} is not a finite number")]
    InvalidValue {
        /// The offending value
        value: f32,
    },

    /// Axis bounds requested over an empty value sequence
    #[error("Degenerate series: no values to frame")]
    DegenerateSeries,
}

#[cfg(feature = "defmt")]
impl defmt::Format for TelemetryError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::InsufficientData { required, available } =>
                defmt::write!(fmt, "Need {} readings, have {}", required, available),
            Self::InvalidMetric =>
                defmt::write!(fmt, "Unknown metric name"),
            Self::InvalidValue { value } =>
                defmt::write!(fmt, "Invalid value {}", value),
            Self::DegenerateSeries =>
                defmt::write!(fmt, "Degenerate series"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        let err = TelemetryError::InsufficientData { required: 1, available: 0 };
        assert_eq!(format!("{}", err), "Insufficient data: need 1, have 0");

        let err = TelemetryError::DegenerateSeries;
        assert_eq!(format!("{}", err), "Degenerate series: no values to frame");
    }

    #[test]
    fn errors_are_copy() {
        let err = TelemetryError::InvalidMetric;
        let copy = err;
        assert_eq!(err, copy);
    }
}
