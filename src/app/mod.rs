//! Application core — pure domain logic, zero I/O.
//!
//! Button debouncing, mode dispatch, and telemetry assembly for the
//! boost controller.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully
//! testable without real peripherals.

pub mod events;
pub mod ports;
pub mod service;
