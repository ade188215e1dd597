//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the [`MapSensor`] and the [`SolenoidDriver`], exposing them
//! through [`InputPort`], [`SensorPort`], and [`ActuatorPort`].  This
//! is the only module in the system that touches actual hardware.  On
//! non-espidf targets, the underlying drivers use cfg-gated simulation
//! stubs.

use crate::app::ports::{ActuatorPort, InputPort, SensorPort};
use crate::drivers::hw_init;
use crate::drivers::solenoid::SolenoidDriver;
use crate::sensors::map::MapSensor;

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    map: MapSensor,
    solenoid: SolenoidDriver,
}

impl HardwareAdapter {
    /// `map` must already carry its atmospheric baseline.
    pub fn new(map: MapSensor, solenoid: SolenoidDriver) -> Self {
        Self { map, solenoid }
    }

    pub fn solenoid(&self) -> &SolenoidDriver {
        &self.solenoid
    }
}

// ── InputPort implementation ──────────────────────────────────

impl InputPort for HardwareAdapter {
    fn raw_level(&mut self, gpio: i32) -> bool {
        hw_init::gpio_read(gpio)
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl SensorPort for HardwareAdapter {
    fn boost_psig(&mut self) -> f32 {
        self.map.gauge_psig(MapSensor::read_raw())
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl ActuatorPort for HardwareAdapter {
    fn set_solenoid_duty(&mut self, duty: u8) {
        self.solenoid.set_duty(duty);
    }

    fn solenoid_fail_safe(&mut self) {
        self.solenoid.fail_safe();
    }
}
