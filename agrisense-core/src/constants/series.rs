//! Series Processing Parameters
//!
//! Window sizes and display margins for the chart pipeline.

/// Number of most-recent readings a chart shows.
///
/// The processor retains exactly this many readings; older samples are
/// overwritten as new ones arrive. Twenty points at the one-second poll
/// interval gives a rolling 20-second view.
pub const SERIES_WINDOW: usize = 20;

/// Width of the trailing moving average applied before display.
///
/// Three samples is enough to knock sensor jitter off the line without
/// hiding genuine trends. Sequences shorter than this pass through
/// unsmoothed.
pub const SMOOTH_WINDOW: usize = 3;

/// Lower axis margin factor applied to the series minimum.
///
/// The y-axis floor is `floor(AXIS_MARGIN_LOW * min)`, leaving 20% of
/// headroom below the data so the line never touches the frame.
pub const AXIS_MARGIN_LOW: f32 = 0.8;

/// Upper axis margin factor applied to the series maximum.
///
/// The y-axis ceiling is `ceil(AXIS_MARGIN_HIGH * max)`.
pub const AXIS_MARGIN_HIGH: f32 = 1.2;

/// Default number of readings drained from a stream per ingest cycle.
///
/// Bounds the work done inside one poll tick; a slow cycle leaves the
/// remainder for the next tick instead of stalling the caller.
pub const DEFAULT_INGEST_BUDGET: usize = 16;
