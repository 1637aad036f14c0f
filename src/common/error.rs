// src/common/error.rs

// The driver contract signals failure as a bare boolean, so no variant here
// carries an underlying cause. Display strings double as the console
// messages: reporting a failure is formatting the error.

/// Fatal faults. Each one halts the session permanently; recovery requires
/// an external restart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Fault {
    /// The startup handshake with the sensor failed.
    #[error("Failed to find SCD30 chip")]
    SensorNotFound,

    /// One of the calibration writes was rejected by the sensor.
    #[error(transparent)]
    Calibration(#[from] CalibrationError),

    /// The supplied configuration was refused before touching the sensor.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A calibration write that failed. One variant per step of the fixed
/// write sequence.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalibrationError {
    #[error("Failed to set altitude offset")]
    AltitudeOffset,

    #[error("Failed to set temperature offset")]
    TemperatureOffset,

    #[error("Failed to enable or disable self calibration")]
    SelfCalibration,

    #[error("Failed to force recalibration with reference")]
    ForcedRecalibration,
}

/// Configuration rejected by [`MonitorConfig::validate`].
///
/// [`MonitorConfig::validate`]: crate::common::config::MonitorConfig::validate
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The forced recalibration reference sits outside the sensor's
    /// accepted 400-2000 ppm window.
    #[error("Forced recalibration reference {0} ppm out of range")]
    FrcReferenceOutOfRange(u16),

    /// A zero poll interval would spin the polling loop without pause.
    #[error("Poll interval must be non-zero")]
    ZeroPollInterval,
}

/// Transient failure of a single sample read.
///
/// Reported once, then the current poll step is abandoned; the next step
/// proceeds normally. Never escalates to a [`Fault`], even when repeated.
#[derive(Debug, Copy, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Error reading sensor data")]
pub struct ReadError;

#[cfg(test)]
mod tests {
    use super::*;
    use arrayvec::ArrayString;
    use core::fmt::Write;

    fn rendered(err: impl core::fmt::Display) -> ArrayString<64> {
        let mut out = ArrayString::new();
        write!(out, "{}", err).unwrap();
        out
    }

    #[test]
    fn fault_messages_match_console_contract() {
        assert_eq!(
            rendered(Fault::SensorNotFound).as_str(),
            "Failed to find SCD30 chip"
        );
        assert_eq!(
            rendered(Fault::from(CalibrationError::SelfCalibration)).as_str(),
            "Failed to enable or disable self calibration"
        );
        assert_eq!(rendered(ReadError).as_str(), "Error reading sensor data");
    }

    #[test]
    fn calibration_messages_name_their_step() {
        assert_eq!(
            rendered(CalibrationError::AltitudeOffset).as_str(),
            "Failed to set altitude offset"
        );
        assert_eq!(
            rendered(CalibrationError::TemperatureOffset).as_str(),
            "Failed to set temperature offset"
        );
        assert_eq!(
            rendered(CalibrationError::ForcedRecalibration).as_str(),
            "Failed to force recalibration with reference"
        );
    }

    #[test]
    fn config_errors_carry_the_offending_value() {
        assert_eq!(
            rendered(ConfigError::FrcReferenceOutOfRange(2001)).as_str(),
            "Forced recalibration reference 2001 ppm out of range"
        );
    }
}
