//! Closed-loop mode: hysteresis-banded PID boost regulation.
//!
//! The manifold gauge reading selects one of three bands relative to
//! `cutoff = setpoint - threshold`:
//!
//! ```text
//!           duty 0          priming duty        PID output
//!   ────────────────────┬──────────────────┬──────────────────▶ PSIG
//!                    cutoff            cutoff + 1
//! ```
//!
//! Below the cutoff the turbo is still spooling and the solenoid stays
//! shut; the 1 PSI priming band pre-loads the wastegate line at a fixed
//! duty so the handover to the PID is not a step from zero.  The PID is
//! held in Manual through both inactive bands, which doubles as its
//! anti-windup while out of range.

use core::fmt::Write;

use super::engine::BoostMode;
use super::mode::{ControlMode, StatusLine};
use super::pid::{Action, PidController, PidMode};
use crate::app::events::TelemetryRecord;
use crate::app::ports::BoostIo;
use crate::config::BoostConfig;

/// Width of the priming band above the cutoff, in PSI.
const PRIMING_BAND_PSI: f32 = 1.0;

pub struct ClosedLoopMode {
    pid: PidController,
    setpoint_step: f32,
    threshold: f32,
    priming_duty: u8,
    tick_secs: f32,
    last_reading: f32,
    last_duty: u8,
}

impl ClosedLoopMode {
    pub fn new(config: &BoostConfig) -> Self {
        let mut pid = PidController::new(
            config.kp,
            config.ki,
            config.kd,
            config.closed_loop_init_setpoint,
            Action::Reverse,
        );
        pid.set_limits(0.0, 255.0);

        Self {
            pid,
            setpoint_step: config.setpoint_step_psi,
            threshold: config.closed_loop_threshold_psi,
            priming_duty: config.closed_loop_priming_duty,
            tick_secs: config.tick_secs(),
            last_reading: 0.0,
            last_duty: 0,
        }
    }

    pub fn setpoint(&self) -> f32 {
        self.pid.target()
    }

    pub fn last_duty(&self) -> u8 {
        self.last_duty
    }

    /// Gauge reading below which the solenoid is held shut.
    fn cutoff(&self) -> f32 {
        self.pid.target() - self.threshold
    }

    /// Build the structured telemetry record for the current tick.
    pub fn telemetry(&self, timestamp_ms: u64) -> TelemetryRecord {
        let (kp, ki, kd) = self.pid.gains();
        TelemetryRecord {
            timestamp_ms,
            setpoint: self.pid.target(),
            map_reading: self.last_reading,
            duty_cycle: self.last_duty,
            kp,
            ki,
            kd,
        }
    }
}

impl ControlMode for ClosedLoopMode {
    fn id(&self) -> BoostMode {
        BoostMode::ClosedLoop
    }

    fn header(&self) -> &'static str {
        "EBC: Closed Loop"
    }

    fn on_increase_request(&mut self) {
        self.pid.set_target(self.pid.target() + self.setpoint_step);
    }

    fn on_decrease_request(&mut self) {
        // Setpoint never goes negative.
        let next = (self.pid.target() - self.setpoint_step).max(0.0);
        self.pid.set_target(next);
    }

    fn on_activate(&mut self, _io: &mut dyn BoostIo) {
        self.pid.set_mode(PidMode::Automatic);
    }

    fn on_deactivate(&mut self, io: &mut dyn BoostIo) {
        self.pid.set_mode(PidMode::Manual);
        io.solenoid_fail_safe();
    }

    fn update(&mut self, io: &mut dyn BoostIo) {
        let reading = io.boost_psig();
        self.last_reading = reading;

        let cutoff = self.cutoff();
        let duty = if reading < cutoff {
            // Spooling: solenoid shut, controller suspended.
            self.pid.set_mode(PidMode::Manual);
            0
        } else if reading < cutoff + PRIMING_BAND_PSI {
            // Priming band: fixed duty pre-loads the wastegate line.
            self.pid.set_mode(PidMode::Manual);
            self.priming_duty
        } else {
            self.pid.set_mode(PidMode::Automatic);
            match self.pid.compute(reading, self.tick_secs) {
                Some(out) => out as u8,
                None => 0,
            }
        };

        self.last_duty = duty;
        io.set_solenoid_duty(duty);
    }

    fn render_status(&self) -> StatusLine {
        let mut line = StatusLine::new();
        let _ = write!(line, "T {:.1} B {:.1}", self.pid.target(), self.last_reading);
        line
    }
}
