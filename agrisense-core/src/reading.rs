//! Telemetry Readings
//!
//! A reading is one gateway sample: a timestamp plus a value slot per
//! metric. Slots may be empty - a field gateway drops sensors that fail
//! to answer within the poll interval rather than holding up the report.
//!
//! Missing metrics are modeled as `None`, never as a NaN sentinel, so a
//! half-populated reading cannot silently poison downstream averages.
//! Validity checks happen at the ingest boundary (see
//! [`Ingestor`](crate::stream::Ingestor)) and at classification time, not
//! here: the type itself stays permissive so recorded data can be replayed
//! exactly as it arrived.

use crate::metric::{Metric, METRIC_COUNT};
use crate::time::Timestamp;

/// One telemetry sample
///
/// Fixed-size and `Copy`; a reading occupies a few dozen bytes and moves
/// through buffers without allocation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    timestamp: Timestamp,
    values: [Option<f32>; METRIC_COUNT],
}

impl Reading {
    /// Create an empty reading at `timestamp` (milliseconds)
    pub const fn new(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            values: [None; METRIC_COUNT],
        }
    }

    /// Builder-style setter
    ///
    /// ```
    /// use agrisense_core::{Metric, Reading};
    ///
    /// let reading = Reading::new(1_000)
    ///     .with(Metric::Temperature, 31.5)
    ///     .with(Metric::Humidity, 74.0);
    /// assert_eq!(reading.get(Metric::Humidity), Some(74.0));
    /// assert_eq!(reading.get(Metric::Ph), None);
    /// ```
    pub fn with(mut self, metric: Metric, value: f32) -> Self {
        self.values[metric.index()] = Some(value);
        self
    }

    /// Sample timestamp in milliseconds
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Value for `metric`, if the gateway reported it
    pub fn get(&self, metric: Metric) -> Option<f32> {
        self.values[metric.index()]
    }

    /// Set or overwrite a metric value
    pub fn set(&mut self, metric: Metric, value: f32) {
        self.values[metric.index()] = Some(value);
    }

    /// True when every metric carries a finite value
    pub fn is_complete(&self) -> bool {
        self.values
            .iter()
            .all(|slot| matches!(slot, Some(value) if value.is_finite()))
    }

    /// True when some reported value is NaN or infinite
    ///
    /// Missing slots do not count - absent is a normal gateway condition,
    /// a non-finite number is a fault.
    pub fn has_invalid_values(&self) -> bool {
        self.values.iter().flatten().any(|value| !value.is_finite())
    }
}

/// Wire record for gateway telemetry payloads
///
/// Field names match the JSON keys the gateway publishes on its data
/// endpoint; sensors that did not answer are omitted. Converts to and
/// from [`Reading`] losslessly.
#[cfg(feature = "serde")]
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ReadingRecord {
    /// Sample timestamp in milliseconds since epoch
    pub timestamp: Timestamp,
    /// Air temperature (°C)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    /// Relative humidity (%)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub humidity: Option<f32>,
    /// Soil electrical conductivity (µS/cm)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soil_conductivity: Option<f32>,
    /// Soil nitrogen content (mg/kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nitrogen: Option<f32>,
    /// Soil pH
    #[serde(rename = "pH", default, skip_serializing_if = "Option::is_none")]
    pub ph: Option<f32>,
    /// Soil phosphorus content (mg/kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phosphorus: Option<f32>,
    /// Soil potassium content (mg/kg)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub potassium: Option<f32>,
}

#[cfg(feature = "serde")]
impl From<ReadingRecord> for Reading {
    fn from(record: ReadingRecord) -> Self {
        let mut reading = Reading::new(record.timestamp);
        let slots = [
            (Metric::Temperature, record.temperature),
            (Metric::Humidity, record.humidity),
            (Metric::SoilConductivity, record.soil_conductivity),
            (Metric::Nitrogen, record.nitrogen),
            (Metric::Ph, record.ph),
            (Metric::Phosphorus, record.phosphorus),
            (Metric::Potassium, record.potassium),
        ];
        for (metric, slot) in slots {
            if let Some(value) = slot {
                reading.set(metric, value);
            }
        }
        reading
    }
}

#[cfg(feature = "serde")]
impl From<Reading> for ReadingRecord {
    fn from(reading: Reading) -> Self {
        ReadingRecord {
            timestamp: reading.timestamp(),
            temperature: reading.get(Metric::Temperature),
            humidity: reading.get(Metric::Humidity),
            soil_conductivity: reading.get(Metric::SoilConductivity),
            nitrogen: reading.get(Metric::Nitrogen),
            ph: reading.get(Metric::Ph),
            phosphorus: reading.get(Metric::Phosphorus),
            potassium: reading.get(Metric::Potassium),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_reading_has_no_values() {
        let reading = Reading::new(1000);
        assert_eq!(reading.timestamp(), 1000);
        for metric in Metric::ALL {
            assert_eq!(reading.get(metric), None);
        }
        assert!(!reading.is_complete());
        assert!(!reading.has_invalid_values());
    }

    #[test]
    fn builder_sets_slots() {
        let reading = Reading::new(2000)
            .with(Metric::Temperature, 30.0)
            .with(Metric::Ph, 6.2);

        assert_eq!(reading.get(Metric::Temperature), Some(30.0));
        assert_eq!(reading.get(Metric::Ph), Some(6.2));
        assert_eq!(reading.get(Metric::Potassium), None);
    }

    #[test]
    fn invalid_values_detected() {
        let reading = Reading::new(0)
            .with(Metric::Humidity, 70.0)
            .with(Metric::Nitrogen, f32::NAN);
        assert!(reading.has_invalid_values());

        let reading = Reading::new(0).with(Metric::Humidity, f32::INFINITY);
        assert!(reading.has_invalid_values());

        // Missing slots are not invalid
        let reading = Reading::new(0).with(Metric::Humidity, 70.0);
        assert!(!reading.has_invalid_values());
    }

    #[test]
    fn complete_requires_all_seven() {
        let mut reading = Reading::new(0);
        for metric in Metric::ALL {
            assert!(!reading.is_complete());
            reading.set(metric, 1.0);
        }
        assert!(reading.is_complete());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn record_conversion_round_trips() {
        let reading = Reading::new(5000)
            .with(Metric::Temperature, 29.5)
            .with(Metric::Potassium, 33.0);

        let record = ReadingRecord::from(reading);
        assert_eq!(record.temperature, Some(29.5));
        assert_eq!(record.humidity, None);

        let back = Reading::from(record);
        assert_eq!(back, reading);
    }
}
