//! Input/actuator drivers, hardware initialisation, and peripheral helpers.

pub mod debounce;
pub mod hw_init;
pub mod hw_timer;
pub mod solenoid;
pub mod watchdog;
