//! Sensor subsystem — the MAP sensor driver and calibration.

pub mod map;
