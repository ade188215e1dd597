//! Boost control solenoid driver (low-side MOSFET, LEDC PWM).
//!
//! The solenoid bleeds manifold pressure away from the wastegate
//! actuator; duty 0 de-energises the coil and the wastegate falls back
//! to spring pressure.  That de-energised level is the electrical
//! fail-safe and is what Off mode commands.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives the real LEDC channel via hw_init helpers.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolenoidState {
    /// Coil de-energised — wastegate on spring pressure.
    FailSafe,
    /// Coil driven at the given 8-bit duty.
    Driven { duty: u8 },
}

pub struct SolenoidDriver {
    state: SolenoidState,
    hw_duty: u8,
}

impl Default for SolenoidDriver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolenoidDriver {
    pub fn new() -> Self {
        Self {
            state: SolenoidState::FailSafe,
            hw_duty: 0,
        }
    }

    /// Drive the coil at `duty` (0-255).  Duty 0 is the fail-safe level.
    pub fn set_duty(&mut self, duty: u8) {
        self.set_duty_hw(duty);
        self.hw_duty = duty;
        self.state = if duty == 0 {
            SolenoidState::FailSafe
        } else {
            SolenoidState::Driven { duty }
        };
    }

    /// De-energise the coil.
    pub fn fail_safe(&mut self) {
        self.set_duty(0);
    }

    fn set_duty_hw(&self, duty: u8) {
        hw_init::ledc_set(hw_init::LEDC_CH_SOLENOID, duty);
    }

    pub fn state(&self) -> SolenoidState {
        self.state
    }

    pub fn current_duty(&self) -> u8 {
        self.hw_duty
    }

    pub fn is_energised(&self) -> bool {
        !matches!(self.state, SolenoidState::FailSafe)
    }
}
