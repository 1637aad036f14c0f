// src/session/sync_session/report.rs

use arrayvec::ArrayString;
use core::fmt::{Display, Write};

use crate::common::hal_traits::Console;
use crate::common::types::{Sample, SensorSettings};

// Longest line in practice is the CO2 one; 96 bytes leaves slack for
// pathological float values.
const LINE_CAPACITY: usize = 96;

// A line that overflows the buffer arrives truncated, never dropped.
fn emit<C: Console>(console: &mut C, args: core::fmt::Arguments<'_>) {
    let mut line = ArrayString::<LINE_CAPACITY>::new();
    let _ = line.write_fmt(args);
    console.write_line(&line);
}

/// Writes one message line, typically a fault or read error rendered via its
/// `Display` string.
pub(crate) fn write_message<C: Console>(console: &mut C, message: &dyn Display) {
    emit(console, format_args!("{}", message));
}

/// Writes the per-sample block: three labeled lines and a trailing blank.
///
/// Temperature and humidity carry two decimals, CO2 three.
pub(crate) fn write_sample<C: Console>(console: &mut C, sample: &Sample) {
    emit(
        console,
        format_args!("Temperature: {:.2} degrees C", sample.temperature_c),
    );
    emit(
        console,
        format_args!("Relative Humidity: {:.2} %", sample.relative_humidity),
    );
    emit(console, format_args!("CO2: {:.3} ppm", sample.co2_ppm));
    console.write_line("");
}

/// Writes the configuration report block.
///
/// Pure formatting of an already-read snapshot; the temperature offset is
/// stored in hundredths of a degree and displayed in degrees.
pub(crate) fn write_configuration<C: Console>(console: &mut C, settings: &SensorSettings) {
    console.write_line("Sensor Configuration");
    console.write_line("====================");

    emit(
        console,
        format_args!(
            "Measurement interval: {} seconds",
            settings.measurement_interval_s
        ),
    );
    emit(
        console,
        format_args!(
            "Ambient pressure offset: {} mBar",
            settings.ambient_pressure_mbar
        ),
    );
    emit(
        console,
        format_args!("Altitude offset: {} meters", settings.altitude_m),
    );
    emit(
        console,
        format_args!(
            "Temperature offset: {:.2} degrees C",
            f32::from(settings.temperature_offset_cc) / 100.0
        ),
    );
    emit(
        console,
        format_args!(
            "Forced Recalibration reference: {} ppm",
            settings.frc_reference_ppm
        ),
    );

    if settings.self_calibration {
        console.write_line("Self calibration enabled");
    } else {
        console.write_line("Self calibration disabled");
    }
    console.write_line("");
}
