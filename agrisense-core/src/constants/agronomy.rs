//! Crop Suitability Bands
//!
//! Optimal telemetry bands for coconut-palm cultivation. A latest reading
//! inside its band classifies as `Within`; outside, the advisory layer
//! tells the grower to raise or lower the metric.
//!
//! Bounds are inclusive on both ends. They describe the *optimal* band for
//! the crop, not the physical limits of the sensors - a reading can sit
//! far outside its band and still be a perfectly healthy measurement.

use crate::suitability::SuitabilityRange;

/// Optimal air temperature band (°C).
///
/// Coconut palms are heat-tolerant but growth stalls below 20°C.
///
/// Source: agronomy guidance used by the AgriSense field deployment
pub const TEMPERATURE_RANGE: SuitabilityRange = SuitabilityRange::new(20.0, 48.0);

/// Optimal relative humidity band (%).
///
/// Palms want humid coastal air; prolonged dry air stresses the fronds,
/// while saturated air promotes fungal disease.
pub const HUMIDITY_RANGE: SuitabilityRange = SuitabilityRange::new(60.0, 85.0);

/// Optimal soil electrical conductivity band (µS/cm).
///
/// Conductivity tracks dissolved salts. Below the band the soil is
/// nutrient-poor; above it, salinity starts damaging the root zone.
pub const SOIL_CONDUCTIVITY_RANGE: SuitabilityRange = SuitabilityRange::new(100.0, 500.0);

/// Optimal soil nitrogen band (mg/kg).
pub const NITROGEN_RANGE: SuitabilityRange = SuitabilityRange::new(30.0, 60.0);

/// Optimal soil pH band.
///
/// Slightly acidic to neutral. Outside this band nutrient uptake drops
/// even when the nutrients themselves are present.
pub const PH_RANGE: SuitabilityRange = SuitabilityRange::new(5.5, 7.5);

/// Optimal soil phosphorus band (mg/kg).
pub const PHOSPHORUS_RANGE: SuitabilityRange = SuitabilityRange::new(10.0, 30.0);

/// Optimal soil potassium band (mg/kg).
///
/// Potassium drives nut development; deficiency shows up as reduced yield
/// long before visible leaf symptoms.
pub const POTASSIUM_RANGE: SuitabilityRange = SuitabilityRange::new(20.0, 50.0);
