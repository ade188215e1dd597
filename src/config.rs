//! System configuration parameters
//!
//! All tunable parameters for the boost controller.  Values are
//! compile-time defaults taken from the bench tune; there is no
//! persistence — a power cycle always restores these.

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoostConfig {
    // --- Buttons ---
    /// Debounce window in seconds.  A raw level must hold this long
    /// before the logical state flips.
    pub btn_debounce_secs: f32,
    /// Button sampling frequency (Hz).
    pub btn_sample_hz: u16,

    // --- MAP sensor ---
    /// Sensor class: 2 = 2-bar, 3 = 3-bar.  Anything else reads 0 PSIA.
    pub map_sensor_rating: u8,

    // --- Open loop ---
    /// Initial open-loop solenoid duty cycle (0-255).
    pub open_loop_init_duty: u8,

    // --- Closed loop ---
    /// Duty cycle applied in the priming band just below full
    /// regulation (0-255).
    pub closed_loop_priming_duty: u8,
    /// Hysteresis threshold (PSI) below the setpoint where PID
    /// regulation disengages.
    pub closed_loop_threshold_psi: f32,
    /// Initial boost setpoint (PSIG).
    pub closed_loop_init_setpoint: f32,
    /// Setpoint adjustment per button press (PSIG).
    pub setpoint_step_psi: f32,
    /// PID proportional gain.
    pub kp: f32,
    /// PID integral gain.
    pub ki: f32,
    /// PID derivative gain.
    pub kd: f32,

    // --- Timing ---
    /// Control loop interval (milliseconds).  Also the button sampling
    /// period: 50 ms = 20 Hz.
    pub control_loop_interval_ms: u32,
    /// Status line refresh interval (milliseconds).
    pub display_refresh_ms: u32,
    /// Closed-loop telemetry record interval (milliseconds).
    pub telemetry_interval_ms: u32,
}

impl Default for BoostConfig {
    fn default() -> Self {
        Self {
            // Buttons
            btn_debounce_secs: 0.08,
            btn_sample_hz: 20,

            // MAP sensor
            map_sensor_rating: 3,

            // Open loop
            open_loop_init_duty: 195,

            // Closed loop
            closed_loop_priming_duty: 180,
            closed_loop_threshold_psi: 5.0,
            closed_loop_init_setpoint: 13.0,
            setpoint_step_psi: 0.5,
            kp: 12.0,
            ki: 3.0,
            kd: 0.25,

            // Timing
            control_loop_interval_ms: 50, // 20 Hz
            display_refresh_ms: 250,
            telemetry_interval_ms: 50,
        }
    }
}

impl BoostConfig {
    /// Seconds per control tick.
    pub fn tick_secs(&self) -> f32 {
        self.control_loop_interval_ms as f32 / 1000.0
    }

    /// Range-check the tune before anything is constructed from it.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::Error;

        if self.btn_debounce_secs <= 0.0 {
            return Err(Error::Config("debounce window must be positive"));
        }
        if self.btn_sample_hz == 0 {
            return Err(Error::Config("button sample rate must be positive"));
        }
        if self.map_sensor_rating != 2 && self.map_sensor_rating != 3 {
            return Err(Error::Config("sensor rating must be 2-bar or 3-bar"));
        }
        if self.closed_loop_threshold_psi <= 0.0 {
            return Err(Error::Config("hysteresis threshold must be positive"));
        }
        if self.closed_loop_init_setpoint < self.closed_loop_threshold_psi {
            return Err(Error::Config("setpoint starts below the regulation cutoff"));
        }
        if self.setpoint_step_psi <= 0.0 {
            return Err(Error::Config("setpoint step must be positive"));
        }
        if self.control_loop_interval_ms == 0 {
            return Err(Error::Config("control interval must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = BoostConfig::default();
        assert!(c.btn_debounce_secs > 0.0);
        assert!(c.btn_sample_hz > 0);
        assert!(c.closed_loop_threshold_psi > 0.0);
        assert!(c.closed_loop_init_setpoint > c.closed_loop_threshold_psi);
        assert!(c.setpoint_step_psi > 0.0);
        assert!(c.control_loop_interval_ms > 0);
    }

    #[test]
    fn button_sampling_matches_control_tick() {
        let c = BoostConfig::default();
        // Debounce assumes inputs are sampled once per control tick.
        assert_eq!(1000 / c.btn_sample_hz as u32, c.control_loop_interval_ms);
    }

    #[test]
    fn setpoint_starts_above_cutoff() {
        let c = BoostConfig::default();
        assert!(
            c.closed_loop_init_setpoint - c.closed_loop_threshold_psi > 0.0,
            "regulation cutoff must be positive or the PID would engage at idle"
        );
    }

    #[test]
    fn default_config_validates() {
        assert!(BoostConfig::default().validate().is_ok());
    }

    #[test]
    fn bad_rating_is_rejected() {
        let mut c = BoostConfig::default();
        c.map_sensor_rating = 4;
        assert!(c.validate().is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let c = BoostConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: BoostConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.open_loop_init_duty, c2.open_loop_init_duty);
        assert_eq!(c.map_sensor_rating, c2.map_sensor_rating);
        assert!((c.closed_loop_init_setpoint - c2.closed_loop_init_setpoint).abs() < 0.001);
        assert!((c.kp - c2.kp).abs() < 0.001);
    }
}
