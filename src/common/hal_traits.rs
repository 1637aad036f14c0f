// src/common/hal_traits.rs

use crate::common::types::Sample;

/// Capability contract of the external SCD30 driver.
///
/// The driver owns the bus protocol, checksum handling and the sensor's
/// calibration state machine. Every fallible operation reports success as a
/// bare boolean; the contract carries no error causes, so none are invented
/// on this side of the seam.
pub trait Scd30Driver {
    /// Startup handshake with the sensor. Must succeed before anything else
    /// is called.
    fn begin(&mut self) -> bool;

    /// True when a new measurement is available to read.
    fn data_ready(&mut self) -> bool;

    /// Reads the latest measurement. `None` signals a failed read.
    fn read(&mut self) -> Option<Sample>;

    /// Sets the altitude offset in meters above sea level. Stored in the
    /// sensor's non-volatile memory; overrides any stored pressure offset.
    fn set_altitude_offset(&mut self, meters: u16) -> bool;

    /// Sets the temperature offset in hundredths of a degree Celsius.
    /// Stored in the sensor's non-volatile memory.
    fn set_temperature_offset(&mut self, hundredths_c: u16) -> bool;

    /// Enables or disables automatic self calibration (ASC). Enabling
    /// overrides any previously stored forced calibration value.
    fn set_self_calibration_enabled(&mut self, enabled: bool) -> bool;

    /// Recalibrates against a known reference concentration in ppm.
    /// Overrides any previous self calibration state.
    fn force_recalibration_with_reference(&mut self, ppm: u16) -> bool;

    /// Continuous measurement interval in seconds.
    fn measurement_interval(&mut self) -> u16;

    /// Ambient pressure offset in mBar.
    fn ambient_pressure_offset(&mut self) -> u16;

    /// Altitude offset in meters above sea level.
    fn altitude_offset(&mut self) -> u16;

    /// Temperature offset in hundredths of a degree Celsius.
    fn temperature_offset(&mut self) -> u16;

    /// Forced recalibration reference in ppm.
    fn forced_recalibration_reference(&mut self) -> u16;

    /// Whether automatic self calibration is enabled.
    fn self_calibration_enabled(&mut self) -> bool;
}

/// Abstraction for the delay operations the session needs.
///
/// Note: This could potentially be replaced by directly requiring
/// `embedded_hal::delay::DelayNs` if embedded-hal v1 is mandated.
pub trait MonitorTimer {
    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Line-oriented, human-readable console output.
///
/// Infallible by contract: the serial console this models has no failure
/// path, and output is best-effort diagnostics.
pub trait Console {
    /// True once a host is attached and output will be seen.
    ///
    /// Implementations without an attachment notion keep the default.
    fn attached(&mut self) -> bool {
        true
    }

    /// Writes a single line. The implementation appends its own terminator.
    fn write_line(&mut self, line: &str);
}

/// Adapter wrapping any embedded-hal delay source as a [`MonitorTimer`].
#[cfg(feature = "impl-hal")]
pub struct HalDelay<D>(pub D);

#[cfg(feature = "impl-hal")]
impl<D: embedded_hal::delay::DelayNs> MonitorTimer for HalDelay<D> {
    fn delay_ms(&mut self, ms: u32) {
        self.0.delay_ms(ms);
    }
}
