//! PID controller for closed-loop boost regulation.
//!
//! Proportional-integral-derivative controller with a Manual/Automatic
//! mode switch and selectable action direction.  While Manual, `compute`
//! returns `None` and the internal state is frozen — suspending the
//! controller outside the regulation band is the anti-windup mechanism.
//! Switching back to Automatic reinitialises the state so no stale
//! integral or derivative kick reaches the solenoid.

/// Whether the controller output is live.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PidMode {
    /// Output suspended; internal state frozen and reset on resume.
    Manual,
    /// Output computed every tick.
    Automatic,
}

/// Relationship between error and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Output rises with error (heater-style plant).
    Direct,
    /// Negated gains: output rises as the measurement climbs above the
    /// setpoint.  The boost solenoid plant is reverse-acting — duty
    /// must come up as the reading overshoots to shed pressure.
    Reverse,
}

/// PID controller
pub struct PidController {
    kp: f32,
    ki: f32,
    kd: f32,
    setpoint: f32,
    integral: f32,
    prev_error: f32,
    output_min: f32,
    output_max: f32,
    mode: PidMode,
    action: Action,
}

impl PidController {
    pub fn new(kp: f32, ki: f32, kd: f32, setpoint: f32, action: Action) -> Self {
        Self {
            kp,
            ki,
            kd,
            setpoint,
            integral: 0.0,
            prev_error: 0.0,
            output_min: 0.0,
            output_max: 255.0,
            mode: PidMode::Manual,
            action,
        }
    }

    /// Set output limits
    pub fn set_limits(&mut self, min: f32, max: f32) {
        self.output_min = min;
        self.output_max = max;
    }

    /// Update setpoint
    pub fn set_target(&mut self, setpoint: f32) {
        self.setpoint = setpoint;
    }

    pub fn target(&self) -> f32 {
        self.setpoint
    }

    /// Controller gains (kp, ki, kd).
    pub fn gains(&self) -> (f32, f32, f32) {
        (self.kp, self.ki, self.kd)
    }

    pub fn mode(&self) -> PidMode {
        self.mode
    }

    /// Switch between Manual and Automatic.  The Manual→Automatic edge
    /// resets the internal state for a bumpless restart.
    pub fn set_mode(&mut self, mode: PidMode) {
        if self.mode == PidMode::Manual && mode == PidMode::Automatic {
            self.reset();
        }
        self.mode = mode;
    }

    /// Compute the controller output for the current measurement.
    /// Returns `None` while in Manual mode.
    pub fn compute(&mut self, measurement: f32, dt: f32) -> Option<f32> {
        if self.mode == PidMode::Manual {
            return None;
        }

        let sign = match self.action {
            Action::Direct => 1.0,
            Action::Reverse => -1.0,
        };
        let error = sign * (self.setpoint - measurement);

        // Proportional
        let p = self.kp * error;

        // Integral (anti-windup via saturation check below)
        self.integral += error * dt;
        let i = self.ki * self.integral;

        // Derivative
        let derivative = if dt > 0.0 {
            (error - self.prev_error) / dt
        } else {
            0.0
        };
        let d = self.kd * derivative;

        self.prev_error = error;

        // Clamp output
        let output = (p + i + d).clamp(self.output_min, self.output_max);

        // Anti-windup: if output is saturated, stop integrating
        if output >= self.output_max || output <= self.output_min {
            self.integral -= error * dt;
        }

        Some(output)
    }

    /// Reset controller state
    pub fn reset(&mut self) {
        self.integral = 0.0;
        self.prev_error = 0.0;
    }
}
