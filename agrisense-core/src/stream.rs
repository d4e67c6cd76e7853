//! Reading Streams and Ingest
//!
//! Pull-based seam between the polling transport and the series
//! processor. The transport - an HTTP poller on hosted builds, a serial
//! link on gateways, a recorded slice in tests - implements
//! [`ReadingStream`]; an [`Ingestor`] drains it into a
//! [`SeriesProcessor`] one poll cycle at a time.
//!
//! The trait follows the `nb` non-blocking model so gateways without an
//! async runtime can drive it from a timer tick: `WouldBlock` means
//! "nothing yet, come back next cycle", and the cycle is cancelled by
//! simply not calling [`Ingestor::ingest`] again and dropping the stream.
//! Nothing here retains background state.
//!
//! Malformed readings stop here: a reading that reports NaN or an
//! infinite value for any metric is logged and skipped, so the
//! processor's derivations only ever see finite numbers.

use core::fmt;

use crate::constants::series::DEFAULT_INGEST_BUDGET;
use crate::processor::SeriesProcessor;
use crate::reading::Reading;

// Macro for optional logging
#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

/// Errors surfaced by reading streams
#[derive(Debug, Clone, PartialEq)]
pub enum StreamError<E> {
    /// Transport-level failure (I/O, HTTP, serial)
    Transport(E),
    /// Payload did not parse as a reading
    Format(&'static str),
    /// Source has no more readings (finite replays)
    EndOfStream,
}

impl<E: fmt::Display> fmt::Display for StreamError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "Transport error: {}", e),
            Self::Format(msg) => write!(f, "Format error: {}", msg),
            Self::EndOfStream => write!(f, "End of stream"),
        }
    }
}

/// Pull-based source of telemetry readings
///
/// ## Contract
///
/// - `poll_next` must not block indefinitely
/// - `Err(nb::Error::WouldBlock)` is normal and expected between polls
/// - `EndOfStream` should be sticky for finite sources
pub trait ReadingStream {
    /// Transport error type
    type Error;

    /// Attempt to pull the next reading
    ///
    /// Returns:
    /// - `Ok(reading)` - next reading available
    /// - `Err(nb::Error::WouldBlock)` - no data available yet
    /// - `Err(nb::Error::Other(e))` - stream error occurred
    fn poll_next(&mut self) -> nb::Result<Reading, StreamError<Self::Error>>;

    /// Bounds on remaining readings, `Iterator::size_hint` style
    ///
    /// Default implementation returns `(0, None)` for unbounded sources.
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }
}

/// In-memory stream for tests and replay
///
/// ## Use Cases
///
/// 1. **Unit Testing**: feed known reading sequences
/// 2. **Replay**: re-process recorded telemetry
///
/// ## Example
///
/// ```
/// use agrisense_core::stream::{MemoryStream, ReadingStream};
/// use agrisense_core::{Metric, Reading};
///
/// let readings = [
///     Reading::new(1000).with(Metric::Temperature, 29.0),
///     Reading::new(2000).with(Metric::Temperature, 29.5),
/// ];
///
/// let mut stream = MemoryStream::new(&readings);
/// while let Ok(reading) = stream.poll_next() {
///     let _ = reading; // process
/// }
/// ```
pub struct MemoryStream<'a> {
    /// Slice of readings to stream
    readings: &'a [Reading],
    /// Current position
    position: usize,
}

impl<'a> MemoryStream<'a> {
    /// Create a stream over a recorded slice
    pub fn new(readings: &'a [Reading]) -> Self {
        Self {
            readings,
            position: 0,
        }
    }

    /// Rewind to the first reading
    pub fn reset(&mut self) {
        self.position = 0;
    }

    /// Current position
    pub fn position(&self) -> usize {
        self.position
    }

    /// Check if all readings have been served
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.readings.len()
    }
}

impl<'a> ReadingStream for MemoryStream<'a> {
    type Error = ();

    fn poll_next(&mut self) -> nb::Result<Reading, StreamError<()>> {
        if self.position >= self.readings.len() {
            return Err(nb::Error::Other(StreamError::EndOfStream));
        }

        let reading = self.readings[self.position];
        self.position += 1;
        Ok(reading)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.readings.len() - self.position;
        (remaining, Some(remaining))
    }
}

/// Ingest statistics for one poll cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IngestStats {
    /// Readings appended to the processor
    pub ingested: usize,
    /// Malformed readings skipped (non-finite values, bad payloads)
    pub skipped: usize,
}

/// Drains a reading stream into a series processor
///
/// One [`ingest`](Ingestor::ingest) call is one fetch-and-append cycle of
/// the dashboard poll loop. The per-cycle budget bounds the work done in
/// a single tick; leftovers wait for the next cycle.
pub struct Ingestor {
    budget: usize,
}

impl Ingestor {
    /// Ingestor with the default per-cycle budget
    pub const fn new() -> Self {
        Self {
            budget: DEFAULT_INGEST_BUDGET,
        }
    }

    /// Ingestor with a custom per-cycle budget
    pub const fn with_budget(budget: usize) -> Self {
        Self { budget }
    }

    /// Drain up to the budget from `stream` into `processor`
    ///
    /// Readings carrying a non-finite value, and payloads the transport
    /// could not parse, are counted as skipped and logged - never
    /// appended, never fatal. Stops early on `WouldBlock` (nothing more
    /// this cycle) or `EndOfStream`. A transport error is returned to the
    /// caller; readings already appended stay appended.
    pub fn ingest<S: ReadingStream>(
        &self,
        stream: &mut S,
        processor: &mut SeriesProcessor,
    ) -> Result<IngestStats, StreamError<S::Error>> {
        let mut stats = IngestStats::default();

        for _ in 0..self.budget {
            match stream.poll_next() {
                Ok(reading) => {
                    if reading.has_invalid_values() {
                        stats.skipped += 1;
                        log_warn!(
                            "skipping reading at t={}: non-finite value",
                            reading.timestamp()
                        );
                        continue;
                    }
                    processor.push(reading);
                    stats.ingested += 1;
                }
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(StreamError::EndOfStream)) => break,
                Err(nb::Error::Other(StreamError::Format(_reason))) => {
                    stats.skipped += 1;
                    log_warn!("skipping malformed payload: {}", _reason);
                }
                Err(nb::Error::Other(StreamError::Transport(e))) => {
                    return Err(StreamError::Transport(e));
                }
            }
        }

        Ok(stats)
    }
}

impl Default for Ingestor {
    fn default() -> Self {
        Self::new()
    }
}
