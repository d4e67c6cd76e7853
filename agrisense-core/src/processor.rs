//! Telemetry Series Processor
//!
//! Owns the bounded reading history for one dashboard session and derives
//! every chart-facing output from it: raw metric windows, smoothed series,
//! per-point suitability, axis bounds, and latest-reading advisories.
//!
//! One processor is constructed when the telemetry view opens and dropped
//! when it closes - a plain owned value, no singleton, no interior
//! mutability. Appends come from the poll loop; derivations come from
//! render calls on the same logical thread of control, so ownership alone
//! enforces the single-writer discipline. Derivations never mutate state:
//! calling them repeatedly without an intervening [`push`](SeriesProcessor::push)
//! returns identical results.

use heapless::Vec;

use crate::buffer::ReadingBuffer;
use crate::constants::series::{SERIES_WINDOW, SMOOTH_WINDOW};
use crate::errors::{TelemetryError, TelemetryResult};
use crate::metric::Metric;
use crate::reading::Reading;
use crate::series::{self, MetricSeries};
use crate::suitability::{self, Advice, Suitability};
use crate::time::Timestamp;

/// Series processor over the most recent telemetry readings
///
/// Retention is bounded at [`SERIES_WINDOW`] readings - the only consumer
/// of history is the rolling chart window, so older samples are
/// overwritten rather than accumulated.
pub struct SeriesProcessor {
    history: ReadingBuffer<SERIES_WINDOW>,
}

impl SeriesProcessor {
    /// Create a processor with empty history
    pub const fn new() -> Self {
        Self {
            history: ReadingBuffer::new(),
        }
    }

    /// Append a reading to the history
    ///
    /// No ordering or value checks happen here - the ingest path
    /// ([`Ingestor`](crate::stream::Ingestor)) is where malformed readings
    /// get skipped, so replays and tests can push whatever the gateway
    /// actually recorded.
    pub fn push(&mut self, reading: Reading) {
        self.history.push(reading);
    }

    /// Number of readings currently held, saturating at the window size
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// True when no readings have arrived yet
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Most recent reading, if any
    ///
    /// This is the snapshot the crop-recommendation collaborator forwards
    /// verbatim to its endpoint.
    pub fn latest(&self) -> Option<&Reading> {
        self.history.last()
    }

    /// Raw values of `metric` across the charted window, arrival order
    ///
    /// At most [`SERIES_WINDOW`] values; the newest samples are never
    /// dropped. Readings that lack the metric or report a non-finite
    /// value for it are skipped so derived series stay finite.
    pub fn window_for(&self, metric: Metric) -> Vec<f32, SERIES_WINDOW> {
        let mut values = Vec::new();
        for reading in self.history.iter() {
            if let Some(value) = reading.get(metric) {
                if value.is_finite() {
                    // Cannot overflow: history holds at most SERIES_WINDOW readings
                    let _ = values.push(value);
                }
            }
        }
        values
    }

    /// Chart-ready series for `metric`
    ///
    /// Assembles the full renderer payload: timestamps, the smoothed
    /// values, suitability per smoothed point, and axis bounds. Bounds
    /// are computed over the *raw* window - the frame has to contain the
    /// raw extremes even where smoothing pulls points inward.
    ///
    /// Fails with [`TelemetryError::InsufficientData`] while the window
    /// holds no samples for the metric; the renderer shows its loading
    /// placeholder instead of an empty chart.
    pub fn series(&self, metric: Metric) -> TelemetryResult<MetricSeries> {
        let (timestamps, raw) = self.window_with_timestamps(metric);
        if raw.is_empty() {
            return Err(TelemetryError::InsufficientData {
                required: 1,
                available: 0,
            });
        }

        let bounds = series::axis_bounds(&raw)?;
        let smoothed = series::smooth(&raw, SMOOTH_WINDOW);

        let mut classes = Vec::new();
        for &value in smoothed.iter() {
            // Cannot overflow: one class per smoothed point
            let _ = classes.push(suitability::classify(metric, value)?);
        }

        Ok(MetricSeries {
            timestamps,
            smoothed,
            suitability: classes,
            bounds,
        })
    }

    /// Classify the latest reading of `metric`
    pub fn latest_suitability(&self, metric: Metric) -> TelemetryResult<Suitability> {
        suitability::classify(metric, self.latest_value(metric)?)
    }

    /// Advisory for the latest reading of `metric`
    ///
    /// `InsufficientData` while no readings have arrived (render a loading
    /// state); `InvalidValue` when the latest reading lacks the metric or
    /// carries a non-finite number (render a sensor-fault state).
    pub fn latest_advice(&self, metric: Metric) -> TelemetryResult<Advice> {
        suitability::advice(metric, self.latest_value(metric)?)
    }

    /// Drop all history (view teardown or session reset)
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Latest value of `metric`, with the error mapping shared by the
    /// classification entry points
    fn latest_value(&self, metric: Metric) -> TelemetryResult<f32> {
        let reading = self
            .latest()
            .ok_or(TelemetryError::InsufficientData {
                required: 1,
                available: 0,
            })?;
        reading
            .get(metric)
            .ok_or(TelemetryError::InvalidValue { value: f32::NAN })
    }

    /// Window values paired with the timestamps they came from
    fn window_with_timestamps(
        &self,
        metric: Metric,
    ) -> (Vec<Timestamp, SERIES_WINDOW>, Vec<f32, SERIES_WINDOW>) {
        let mut timestamps = Vec::new();
        let mut values = Vec::new();
        for reading in self.history.iter() {
            if let Some(value) = reading.get(metric) {
                if value.is_finite() {
                    // Cannot overflow: history holds at most SERIES_WINDOW readings
                    let _ = timestamps.push(reading.timestamp());
                    let _ = values.push(value);
                }
            }
        }
        (timestamps, values)
    }
}

impl Default for SeriesProcessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn humidity_reading(timestamp: u64, value: f32) -> Reading {
        Reading::new(timestamp).with(Metric::Humidity, value)
    }

    #[test]
    fn window_is_bounded_and_ordered() {
        let mut processor = SeriesProcessor::new();
        for i in 0..25u64 {
            processor.push(humidity_reading(i * 1000, i as f32));
        }

        let window = processor.window_for(Metric::Humidity);
        assert_eq!(window.len(), SERIES_WINDOW);
        // The last 20 of 25 appends, in arrival order
        for (offset, value) in window.iter().enumerate() {
            assert_eq!(*value, (5 + offset) as f32);
        }
    }

    #[test]
    fn window_skips_missing_and_non_finite() {
        let mut processor = SeriesProcessor::new();
        processor.push(humidity_reading(1000, 70.0));
        processor.push(Reading::new(2000)); // humidity sensor missed this poll
        processor.push(humidity_reading(3000, f32::NAN));
        processor.push(humidity_reading(4000, 72.0));

        let window = processor.window_for(Metric::Humidity);
        assert_eq!(&window[..], &[70.0, 72.0]);
    }

    #[test]
    fn series_aligns_timestamps_with_points() {
        let mut processor = SeriesProcessor::new();
        processor.push(humidity_reading(1000, 70.0));
        processor.push(Reading::new(2000));
        processor.push(humidity_reading(3000, 72.0));

        let result = processor.series(Metric::Humidity).expect("has samples");
        assert_eq!(&result.timestamps[..], &[1000, 3000]);
        assert_eq!(result.smoothed.len(), 2);
        assert_eq!(result.suitability.len(), 2);
    }

    #[test]
    fn series_needs_data() {
        let processor = SeriesProcessor::new();
        assert!(matches!(
            processor.series(Metric::Ph),
            Err(TelemetryError::InsufficientData { .. })
        ));
    }

    #[test]
    fn latest_advice_states() {
        let mut processor = SeriesProcessor::new();
        assert!(matches!(
            processor.latest_advice(Metric::Humidity),
            Err(TelemetryError::InsufficientData { .. })
        ));

        processor.push(Reading::new(1000)); // present, but no humidity slot
        assert!(matches!(
            processor.latest_advice(Metric::Humidity),
            Err(TelemetryError::InvalidValue { .. })
        ));

        processor.push(humidity_reading(2000, 95.0));
        let advice = processor.latest_advice(Metric::Humidity).expect("value present");
        assert_eq!(advice.suitability(), Suitability::Above);
    }

    #[test]
    fn derivations_are_idempotent() {
        let mut processor = SeriesProcessor::new();
        for i in 0..6u64 {
            processor.push(humidity_reading(i * 1000, 60.0 + i as f32));
        }

        let first = processor.series(Metric::Humidity).expect("has samples");
        let second = processor.series(Metric::Humidity).expect("has samples");
        assert_eq!(first, second);
        assert_eq!(
            processor.window_for(Metric::Humidity),
            processor.window_for(Metric::Humidity)
        );
    }

    #[test]
    fn clear_resets_session() {
        let mut processor = SeriesProcessor::new();
        processor.push(humidity_reading(1000, 70.0));
        processor.clear();

        assert!(processor.is_empty());
        assert!(processor.latest().is_none());
    }
}
