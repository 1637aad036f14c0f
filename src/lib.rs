// src/lib.rs

//! Session layer for the Sensirion SCD30 CO2/temperature/humidity sensor.
//!
//! The sensor itself is reached through the [`Scd30Driver`] trait, a
//! boolean-only capability contract: the wire protocol, checksums and
//! calibration math live in the external driver. This crate supplies
//! everything around it: the startup handshake, the one-time calibration
//! write sequence, the configuration report and the cooperative polling
//! loop, with every console message and fault mandated by the sensor
//! session's contract.

#![no_std] // Specify no_std at the crate root

pub mod common;
pub mod session;

// Re-export key types for convenience
pub use common::{
    Console, Fault, MonitorConfig, MonitorTimer, ReadError, Sample, Scd30Driver, SensorSettings,
    SessionState, TickOutcome,
};
pub use session::SyncSession;
