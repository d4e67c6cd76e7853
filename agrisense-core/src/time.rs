//! Time Handling
//!
//! Timestamps are milliseconds since the Unix epoch, as stamped by the
//! gateway when it reads its sensors. The engine never calls a clock on
//! its own - time arrives with the data - but the ingest layer and tests
//! need a clock abstraction, and the chart layer needs wall-clock labels.

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of current time
pub trait TimeSource {
    /// Current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall-clock time (vs monotonic)
    fn is_wall_clock(&self) -> bool;
}

/// System wall clock (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for tests
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Fixed source reporting `timestamp`
    pub const fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Jump to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Advance by `ms` milliseconds
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Format a timestamp as an `HH:MM:SS` chart label (UTC)
///
/// Timestamps that do not map to a calendar instant fall back to the raw
/// millisecond count rather than failing; an odd label beats a missing
/// chart column.
#[cfg(feature = "std")]
pub fn time_label(timestamp: Timestamp) -> std::string::String {
    match chrono::DateTime::from_timestamp_millis(timestamp as i64) {
        Some(instant) => instant.format("%H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut clock = FixedTime::new(1000);
        assert_eq!(clock.now(), 1000);
        assert!(!clock.is_wall_clock());

        clock.advance(500);
        assert_eq!(clock.now(), 1500);

        clock.set(10_000);
        assert_eq!(clock.now(), 10_000);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_is_wall_clock() {
        let clock = SystemTime;
        assert!(clock.is_wall_clock());
        assert!(clock.now() > 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn labels_format_as_clock_time() {
        // 2021-01-01T00:00:05 UTC
        assert_eq!(time_label(1_609_459_205_000), "00:00:05");
        // Epoch itself
        assert_eq!(time_label(0), "00:00:00");
    }
}
