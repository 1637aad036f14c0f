// src/common/config.rs

use crate::common::error::ConfigError;
use crate::common::timing;

/// Default altitude offset in meters above sea level.
pub const DEFAULT_ALTITUDE_OFFSET_M: u16 = 315;

/// Default temperature offset in hundredths of a degree Celsius (4.00 °C).
pub const DEFAULT_TEMPERATURE_OFFSET_CC: u16 = 400;

/// Default forced recalibration reference in ppm (outdoor baseline).
pub const DEFAULT_FRC_REFERENCE_PPM: u16 = 400;

/// Lowest forced recalibration reference the sensor accepts.
pub const FRC_REFERENCE_MIN_PPM: u16 = 400;

/// Highest forced recalibration reference the sensor accepts.
pub const FRC_REFERENCE_MAX_PPM: u16 = 2000;

/// Session configuration, passed in at construction.
///
/// Calibration values are written once and persist in the sensor's
/// non-volatile memory, outliving the process. The write sequence order is
/// fixed per sensor semantics: an altitude offset overrides any stored
/// pressure offset, and the forced recalibration reference overrides any
/// previous self-calibration state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MonitorConfig {
    /// Altitude offset in meters above sea level.
    pub altitude_offset_m: u16,
    /// Temperature offset in hundredths of a degree Celsius
    /// (400 means 4.00 degrees).
    pub temperature_offset_cc: u16,
    /// Automatic self calibration (ASC). Needs sustained operation with
    /// daily exposure to fresh air to converge; mutually exclusive with the
    /// forced reference in practice.
    pub self_calibration: bool,
    /// Known-good CO2 concentration in ppm for forced recalibration.
    /// Accepted window: 400-2000 ppm.
    pub frc_reference_ppm: u16,
    /// Whether `start()` runs the one-time calibration write sequence.
    pub run_calibration: bool,
    /// Whether `start()` blocks until the console reports attached.
    pub wait_for_console: bool,
    /// Pause between poll steps in `run()`, in milliseconds.
    pub poll_interval_ms: u32,
    /// Pause between console attachment checks at startup, in milliseconds.
    pub console_retry_ms: u32,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        MonitorConfig {
            altitude_offset_m: DEFAULT_ALTITUDE_OFFSET_M,
            temperature_offset_cc: DEFAULT_TEMPERATURE_OFFSET_CC,
            self_calibration: false,
            frc_reference_ppm: DEFAULT_FRC_REFERENCE_PPM,
            run_calibration: false,
            wait_for_console: false,
            poll_interval_ms: timing::POLL_INTERVAL.as_millis() as u32,
            console_retry_ms: timing::CONSOLE_RETRY_INTERVAL.as_millis() as u32,
        }
    }
}

impl MonitorConfig {
    /// Checks the configuration against the sensor's accepted ranges.
    ///
    /// Runs before any calibration write so a bad value never reaches the
    /// sensor's non-volatile memory. The forced recalibration reference is
    /// only checked when the calibration sequence will actually run.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run_calibration
            && !(FRC_REFERENCE_MIN_PPM..=FRC_REFERENCE_MAX_PPM)
                .contains(&self.frc_reference_ppm)
        {
            return Err(ConfigError::FrcReferenceOutOfRange(self.frc_reference_ppm));
        }
        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }
}
