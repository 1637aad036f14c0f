// src/common/timing.rs

use core::time::Duration;

// The poll interval paces the session's data-ready checks and is deliberately
// not derived from the sensor's own measurement interval; the sensor side is
// only read back for the configuration report.

/// Default pause between poll steps. Bounds sample-reporting latency at
/// roughly two seconds, matching the sensor's default measurement cadence.
pub const POLL_INTERVAL: Duration = Duration::from_millis(2000);

/// Default pause between console attachment checks while blocking at startup.
pub const CONSOLE_RETRY_INTERVAL: Duration = Duration::from_millis(100);

// === SCD30 continuous-measurement constraints ===

/// Shortest measurement interval the sensor accepts.
pub const MEASUREMENT_INTERVAL_MIN: Duration = Duration::from_secs(2);

/// Longest measurement interval the sensor accepts.
pub const MEASUREMENT_INTERVAL_MAX: Duration = Duration::from_secs(1800);
