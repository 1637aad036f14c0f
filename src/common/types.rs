// src/common/types.rs

use crate::common::error::Fault;

/// One measurement produced by the driver.
///
/// Ephemeral: read on demand, printed, dropped. Nothing in the session
/// retains samples.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Sample {
    /// Temperature in degrees Celsius.
    pub temperature_c: f32,
    /// Relative humidity in percent.
    pub relative_humidity: f32,
    /// CO2 concentration in parts per million.
    pub co2_ppm: f32,
}

/// Snapshot of the configuration stored in the sensor's non-volatile memory,
/// as read back for the configuration report.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SensorSettings {
    /// Continuous measurement interval in seconds.
    pub measurement_interval_s: u16,
    /// Ambient pressure offset in mBar.
    pub ambient_pressure_mbar: u16,
    /// Altitude offset in meters above sea level.
    pub altitude_m: u16,
    /// Temperature offset in hundredths of a degree Celsius
    /// (400 means 4.00 degrees).
    pub temperature_offset_cc: u16,
    /// Forced recalibration reference in ppm.
    pub frc_reference_ppm: u16,
    /// Whether automatic self calibration is enabled.
    pub self_calibration: bool,
}

/// Position in the session lifecycle.
///
/// The path is linear: `Uninitialized → Initializing → Configuring →
/// Reporting → Polling`, with `Halted` reachable from the initialization and
/// configuration steps. `Halted` is terminal within the process; restart
/// policy belongs to whatever supervises the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// Constructed, `start()` not yet called.
    Uninitialized,
    /// Waiting for the console and the sensor handshake.
    Initializing,
    /// Issuing the one-time calibration writes (a no-op pass-through when
    /// calibration is disabled).
    Configuring,
    /// Reading back and printing the stored sensor settings.
    Reporting,
    /// Cooperatively polling for samples. Never left once entered.
    Polling,
    /// Terminal fault state. The contained fault already produced its one
    /// console message.
    Halted(Fault),
}

/// Observable result of one cooperative poll step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum TickOutcome {
    /// No new measurement was available; nothing was read or printed.
    NotReady,
    /// A sample was read and its report block printed.
    Reported(Sample),
    /// A measurement was ready but the read failed; the error line was
    /// printed and the step abandoned. The next step proceeds normally.
    ReadFailed,
}
