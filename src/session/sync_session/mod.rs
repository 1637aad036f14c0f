// src/session/sync_session/mod.rs

mod report;

use crate::common::{
    config::MonitorConfig,
    error::{CalibrationError, Fault, ReadError},
    hal_traits::{Console, MonitorTimer, Scd30Driver},
    types::{Sample, SensorSettings, SessionState, TickOutcome},
};

/// Drives one SCD30 through its process lifetime: startup handshake,
/// optional one-time calibration, configuration report, then cooperative
/// polling.
///
/// The session owns the driver, console and timer exclusively; there is one
/// sequential control path and no shared state.
pub struct SyncSession<D, C, T>
where
    D: Scd30Driver,
    C: Console,
    T: MonitorTimer,
{
    driver: D,
    console: C,
    timer: T,
    config: MonitorConfig,
    state: SessionState,
}

impl<D, C, T> SyncSession<D, C, T>
where
    D: Scd30Driver,
    C: Console,
    T: MonitorTimer,
{
    pub fn new(driver: D, console: C, timer: T, config: MonitorConfig) -> Self {
        SyncSession {
            driver,
            console,
            timer,
            config,
            state: SessionState::Uninitialized,
        }
    }

    /// Current position in the session lifecycle.
    ///
    /// `Halted` is terminal; whatever supervises the session decides whether
    /// to power-cycle.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Releases the underlying parts.
    pub fn free(self) -> (D, C, T) {
        (self.driver, self.console, self.timer)
    }

    // --- Startup ---

    /// Runs the linear startup path: console attach wait, configuration
    /// check, sensor handshake, optional calibration writes, configuration
    /// report.
    ///
    /// Leaves the session in `Polling` on success, or parks it in `Halted`
    /// after printing the fault's one console message. Each calibration
    /// write either succeeds or halts the session with no later step
    /// attempted and no rollback of earlier writes.
    pub fn start(&mut self) -> Result<(), Fault> {
        self.state = SessionState::Initializing;

        if self.config.wait_for_console {
            while !self.console.attached() {
                self.timer.delay_ms(self.config.console_retry_ms);
            }
        }

        if let Err(e) = self.config.validate() {
            return Err(self.halt(Fault::Config(e)));
        }

        if !self.driver.begin() {
            return Err(self.halt(Fault::SensorNotFound));
        }
        self.console.write_line("SCD30 Found!");
        self.console.write_line("");

        self.state = SessionState::Configuring;
        if self.config.run_calibration {
            if let Err(e) = self.calibrate() {
                return Err(self.halt(Fault::Calibration(e)));
            }
        }

        self.state = SessionState::Reporting;
        self.report_configuration();

        self.state = SessionState::Polling;
        Ok(())
    }

    /// Issues the four one-time calibration writes.
    ///
    /// The order is fixed and intentional: the altitude offset overrides any
    /// stored pressure offset, and the forced recalibration reference
    /// overrides the self-calibration state written just before it.
    fn calibrate(&mut self) -> Result<(), CalibrationError> {
        self.console.write_line("Calibration started");

        if !self.driver.set_altitude_offset(self.config.altitude_offset_m) {
            return Err(CalibrationError::AltitudeOffset);
        }
        if !self
            .driver
            .set_temperature_offset(self.config.temperature_offset_cc)
        {
            return Err(CalibrationError::TemperatureOffset);
        }
        if !self
            .driver
            .set_self_calibration_enabled(self.config.self_calibration)
        {
            return Err(CalibrationError::SelfCalibration);
        }
        if !self
            .driver
            .force_recalibration_with_reference(self.config.frc_reference_ppm)
        {
            return Err(CalibrationError::ForcedRecalibration);
        }

        self.console.write_line("Calibration finished");
        Ok(())
    }

    fn halt(&mut self, fault: Fault) -> Fault {
        report::write_message(&mut self.console, &fault);
        self.state = SessionState::Halted(fault);
        fault
    }

    // --- Configuration report ---

    /// Reads back the sensor's stored settings and prints the report block.
    ///
    /// Pure read; repeated calls produce identical output when no writes
    /// happen in between.
    pub fn report_configuration(&mut self) {
        let settings = self.read_settings();
        report::write_configuration(&mut self.console, &settings);
    }

    fn read_settings(&mut self) -> SensorSettings {
        SensorSettings {
            measurement_interval_s: self.driver.measurement_interval(),
            ambient_pressure_mbar: self.driver.ambient_pressure_offset(),
            altitude_m: self.driver.altitude_offset(),
            temperature_offset_cc: self.driver.temperature_offset(),
            frc_reference_ppm: self.driver.forced_recalibration_reference(),
            self_calibration: self.driver.self_calibration_enabled(),
        }
    }

    // --- Polling ---

    /// Probes for a sample without printing anything.
    ///
    /// `WouldBlock` means no new measurement is available yet; no read is
    /// attempted in that case.
    pub fn try_read(&mut self) -> nb::Result<Sample, ReadError> {
        if !self.driver.data_ready() {
            return Err(nb::Error::WouldBlock);
        }
        self.driver.read().ok_or(nb::Error::Other(ReadError))
    }

    /// One cooperative poll step, without any delay.
    ///
    /// On a successful read the sample block is printed. A failed read
    /// reports its one error line and abandons the step; there is no retry
    /// bookkeeping and no escalation, even under repeated failures.
    pub fn tick(&mut self) -> TickOutcome {
        match self.try_read() {
            Ok(sample) => {
                report::write_sample(&mut self.console, &sample);
                TickOutcome::Reported(sample)
            }
            Err(nb::Error::WouldBlock) => TickOutcome::NotReady,
            Err(nb::Error::Other(err)) => {
                report::write_message(&mut self.console, &err);
                TickOutcome::ReadFailed
            }
        }
    }

    /// The terminal polling loop: tick, wait, repeat.
    ///
    /// Exits only with the process or the power. Hosts with their own
    /// scheduler should call [`tick`](Self::tick) on a fixed interval
    /// instead. The pause is the configured poll interval, deliberately
    /// decoupled from the sensor's own measurement interval.
    pub fn run(&mut self) -> ! {
        loop {
            self.tick();
            self.timer.delay_ms(self.config.poll_interval_ms);
        }
    }
}
