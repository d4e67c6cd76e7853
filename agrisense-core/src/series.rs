//! Chart-Ready Series Math
//!
//! Pure functions that shape a raw metric window for display: a trailing
//! moving average to calm sensor jitter, and integer-aligned axis bounds
//! that frame the data with margin. Both are deterministic over their
//! inputs - the processor owns *which* values go in, this module owns the
//! arithmetic.
//!
//! `libm` supplies `floorf`/`ceilf` so the same code runs on no_std
//! gateway builds.

use heapless::Vec;

use crate::constants::series::{AXIS_MARGIN_HIGH, AXIS_MARGIN_LOW, SERIES_WINDOW};
use crate::errors::{TelemetryError, TelemetryResult};
use crate::suitability::Suitability;
use crate::time::Timestamp;

/// Integer-aligned y-axis frame with margin
///
/// Both bounds are whole numbers (post floor/ceil) held as `f32` so they
/// drop straight into chart configuration alongside the data values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Lower bound: `floor(AXIS_MARGIN_LOW * series minimum)`
    pub min: f32,
    /// Upper bound: `ceil(AXIS_MARGIN_HIGH * series maximum)`
    pub max: f32,
}

/// Chart-ready output for one metric
///
/// The three sequences are index-aligned: element `i` of each describes
/// the same sample.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSeries {
    /// Sample timestamps in arrival order
    pub timestamps: Vec<Timestamp, SERIES_WINDOW>,
    /// Smoothed values, same length as `timestamps`
    pub smoothed: Vec<f32, SERIES_WINDOW>,
    /// Per-point suitability of the smoothed values
    pub suitability: Vec<Suitability, SERIES_WINDOW>,
    /// Y-axis frame computed over the raw window
    pub bounds: AxisBounds,
}

#[cfg(feature = "std")]
impl MetricSeries {
    /// X-axis labels, one `HH:MM:SS` string per point
    pub fn labels(&self) -> std::vec::Vec<std::string::String> {
        self.timestamps
            .iter()
            .map(|&timestamp| crate::time::time_label(timestamp))
            .collect()
    }
}

/// Trailing moving average over `values`
///
/// Sequences shorter than `window` pass through unchanged - the chart
/// shows raw points until enough samples accumulate, and callers rely on
/// that identity. Otherwise element `i` is
/// the arithmetic mean of `values[max(0, i - window + 1) ..= i]`: the
/// window trails, never looks ahead, so the newest point reacts to new
/// data immediately. Output length always equals input length.
///
/// A `window` of zero or one is also the identity; no rounding is applied
/// here (bounds are the only place values get integer-aligned).
pub fn smooth<const N: usize>(values: &Vec<f32, N>, window: usize) -> Vec<f32, N> {
    if window <= 1 || values.len() < window {
        return values.clone();
    }

    let mut smoothed = Vec::new();
    for i in 0..values.len() {
        let start = (i + 1).saturating_sub(window);
        let span = &values[start..=i];
        let sum: f32 = span.iter().sum();
        // Cannot overflow: output length equals input length
        let _ = smoothed.push(sum / span.len() as f32);
    }
    smoothed
}

/// Trailing moving average at the display smoothing width
///
/// Convenience wrapper over [`smooth`] with
/// [`SMOOTH_WINDOW`](crate::constants::series::SMOOTH_WINDOW).
pub fn smooth_default<const N: usize>(values: &Vec<f32, N>) -> Vec<f32, N> {
    smooth(values, crate::constants::series::SMOOTH_WINDOW)
}

/// Axis bounds framing `values` with margin
///
/// `min = floor(0.8 * minimum)`, `max = ceil(1.2 * maximum)` - a scaled,
/// integer-aligned frame that keeps the line off the chart edges. The
/// margins frame the data for the non-negative readings farm sensors
/// produce.
///
/// An empty sequence has no extremes to frame and fails with
/// [`TelemetryError::DegenerateSeries`]; a non-finite element fails with
/// [`TelemetryError::InvalidValue`]. Neither condition ever produces
/// non-finite bounds.
pub fn axis_bounds(values: &[f32]) -> TelemetryResult<AxisBounds> {
    if values.is_empty() {
        return Err(TelemetryError::DegenerateSeries);
    }

    let mut lo = f32::INFINITY;
    let mut hi = f32::NEG_INFINITY;
    for &value in values {
        if !value.is_finite() {
            return Err(TelemetryError::InvalidValue { value });
        }
        if value < lo {
            lo = value;
        }
        if value > hi {
            hi = value;
        }
    }

    Ok(AxisBounds {
        // libm keeps this path identical on no_std builds
        min: libm::floorf(lo * AXIS_MARGIN_LOW),
        max: libm::ceilf(hi * AXIS_MARGIN_HIGH),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vec20(values: &[f32]) -> Vec<f32, SERIES_WINDOW> {
        Vec::from_slice(values).expect("fits the series window")
    }

    #[test]
    fn smooth_is_identity_below_window() {
        let values = vec20(&[10.0, 20.0]);
        assert_eq!(smooth(&values, 3), values);

        let empty = vec20(&[]);
        assert_eq!(smooth(&empty, 3), empty);
    }

    #[test]
    fn smooth_is_trailing_mean() {
        let values = vec20(&[10.0, 20.0, 30.0, 40.0]);
        let smoothed = smooth(&values, 3);
        // Means of [10], [10,20], [10,20,30], [20,30,40]
        assert_eq!(&smoothed[..], &[10.0, 15.0, 20.0, 30.0]);
    }

    #[test]
    fn smooth_preserves_length() {
        let values = vec20(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert_eq!(smooth(&values, 3).len(), values.len());
        assert_eq!(smooth_default(&values).len(), values.len());
    }

    #[test]
    fn smooth_degenerate_windows_are_identity() {
        let values = vec20(&[5.0, 6.0, 7.0]);
        assert_eq!(smooth(&values, 0), values);
        assert_eq!(smooth(&values, 1), values);
    }

    #[test]
    fn axis_bounds_scale_and_align() {
        let bounds = axis_bounds(&[10.0, 20.0, 30.0]).expect("non-empty");
        assert_eq!(bounds.min, 8.0);
        assert_eq!(bounds.max, 36.0);
    }

    #[test]
    fn axis_bounds_single_value() {
        let bounds = axis_bounds(&[10.0]).expect("non-empty");
        assert_eq!(bounds.min, 8.0);
        assert_eq!(bounds.max, 12.0);
    }

    #[test]
    fn axis_bounds_reject_empty() {
        assert_eq!(axis_bounds(&[]), Err(TelemetryError::DegenerateSeries));
    }

    #[test]
    fn axis_bounds_reject_non_finite() {
        assert!(matches!(
            axis_bounds(&[10.0, f32::NAN]),
            Err(TelemetryError::InvalidValue { .. })
        ));
        assert!(matches!(
            axis_bounds(&[f32::INFINITY]),
            Err(TelemetryError::InvalidValue { .. })
        ));
    }
}
