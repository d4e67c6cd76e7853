//! Constants for AgriSense Core
//!
//! Centralized, documented constants used throughout the series engine.
//! All numeric values live here with their purpose and source, so the
//! processing code stays free of magic numbers.
//!
//! ## Organization
//!
//! - **Agronomy**: suitability bands per telemetry metric
//! - **Series**: window sizes, smoothing width, and axis margins
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. When adding new constants, document purpose, units, and source
//! 3. Group related constants together

/// Agronomic suitability bands per telemetry metric.
pub mod agronomy;

/// Series processing parameters: windows, smoothing, and axis margins.
pub mod series;

// Re-export commonly used constants for convenience
pub use agronomy::{
    HUMIDITY_RANGE, NITROGEN_RANGE, PHOSPHORUS_RANGE, PH_RANGE,
    POTASSIUM_RANGE, SOIL_CONDUCTIVITY_RANGE, TEMPERATURE_RANGE,
};

pub use series::{
    AXIS_MARGIN_HIGH, AXIS_MARGIN_LOW, DEFAULT_INGEST_BUDGET,
    SERIES_WINDOW, SMOOTH_WINDOW,
};
