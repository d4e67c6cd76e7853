//! Farm Telemetry Metrics
//!
//! The fixed seven-metric set reported by the field gateway: two climate
//! metrics (air temperature, relative humidity) and five soil metrics
//! (conductivity, nitrogen, pH, phosphorus, potassium).
//!
//! The set is closed. Every downstream table - suitability
//! bands, value slots in a [`Reading`](crate::reading::Reading), chart
//! panels - is indexed by `Metric`, so an unknown metric cannot exist past
//! the parse boundary. Foreign names arriving on the wire fail fast with
//! [`TelemetryError::InvalidMetric`] instead of flowing through as missing
//! lookups.

use crate::errors::{TelemetryError, TelemetryResult};
use crate::suitability::SuitabilityRange;

/// Number of metrics in the fixed telemetry set
pub const METRIC_COUNT: usize = 7;

/// Telemetry metric enumeration
///
/// Discriminants index the per-reading value slots, so they must stay
/// dense and zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Metric {
    /// Air temperature (°C)
    Temperature = 0,
    /// Relative humidity (%)
    Humidity = 1,
    /// Soil electrical conductivity (µS/cm)
    SoilConductivity = 2,
    /// Soil nitrogen content (mg/kg)
    Nitrogen = 3,
    /// Soil pH
    Ph = 4,
    /// Soil phosphorus content (mg/kg)
    Phosphorus = 5,
    /// Soil potassium content (mg/kg)
    Potassium = 6,
}

impl Metric {
    /// All metrics in gateway report order
    pub const ALL: [Metric; METRIC_COUNT] = [
        Metric::Temperature,
        Metric::Humidity,
        Metric::SoilConductivity,
        Metric::Nitrogen,
        Metric::Ph,
        Metric::Phosphorus,
        Metric::Potassium,
    ];

    /// Wire and display name, matching the gateway JSON keys
    pub const fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::Humidity => "humidity",
            Metric::SoilConductivity => "soil_conductivity",
            Metric::Nitrogen => "nitrogen",
            Metric::Ph => "pH",
            Metric::Phosphorus => "phosphorus",
            Metric::Potassium => "potassium",
        }
    }

    /// Unit of measurement
    pub const fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature => "°C",
            Metric::Humidity => "%",
            Metric::SoilConductivity => "µS/cm",
            Metric::Nitrogen => "mg/kg",
            Metric::Ph => "",
            Metric::Phosphorus => "mg/kg",
            Metric::Potassium => "mg/kg",
        }
    }

    /// Agronomic suitability band for this metric
    pub const fn suitable_range(&self) -> SuitabilityRange {
        use crate::constants::agronomy;
        match self {
            Metric::Temperature => agronomy::TEMPERATURE_RANGE,
            Metric::Humidity => agronomy::HUMIDITY_RANGE,
            Metric::SoilConductivity => agronomy::SOIL_CONDUCTIVITY_RANGE,
            Metric::Nitrogen => agronomy::NITROGEN_RANGE,
            Metric::Ph => agronomy::PH_RANGE,
            Metric::Phosphorus => agronomy::PHOSPHORUS_RANGE,
            Metric::Potassium => agronomy::POTASSIUM_RANGE,
        }
    }

    /// Parse a wire name; names outside the fixed set fail fast
    pub fn parse(name: &str) -> TelemetryResult<Self> {
        Metric::ALL
            .iter()
            .copied()
            .find(|metric| metric.name() == name)
            .ok_or(TelemetryError::InvalidMetric)
    }

    /// Index into per-reading value slots
    pub(crate) const fn index(&self) -> usize {
        *self as usize
    }
}
