//! Manifold absolute pressure (MAP) sensor.
//!
//! Converts raw ADC counts to absolute pressure (PSIA) through a
//! two-point linear calibration selected by the sensor class (2-bar or
//! 3-bar GM-style sensor), then to gauge pressure (PSIG) against an
//! atmospheric baseline captured once at startup.
//!
//! The baseline capture assumes the engine is off at boot, so the
//! manifold sits at ambient pressure.  It is immutable afterward —
//! gauge readings drift with altitude only across power cycles.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: reads ADC1_CH4 via the oneshot API (initialised by hw_init).
//! On host/test: reads from a static `AtomicU16` for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicU16, Ordering};

use crate::pins::ADC_MAX_COUNTS;

#[cfg(not(target_os = "espidf"))]
static SIM_MAP_ADC: AtomicU16 = AtomicU16::new(0);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_map_adc(raw: u16) {
    SIM_MAP_ADC.store(raw, Ordering::Relaxed);
}

// Calibration endpoints for GM-style MAP sensors, full ADC swing.
pub const TWO_BAR_MIN_PSIA: f32 = 1.3;
pub const TWO_BAR_MAX_PSIA: f32 = 30.2;
pub const THREE_BAR_MIN_PSIA: f32 = 0.5;
pub const THREE_BAR_MAX_PSIA: f32 = 45.7;

/// Linear interpolation, the Arduino `map()` generalised to floats.
fn map_range(x: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    (x - in_min) * (out_max - out_min) / (in_max - in_min) + out_min
}

/// Convert raw ADC counts to absolute pressure for the given sensor
/// class (2 = 2-bar, 3 = 3-bar).
///
/// An unknown class returns 0.0 PSIA — a capped defensive result rather
/// than an error, preserved from the original calibration table.
pub fn counts_to_psia(rating: u8, raw: u16) -> f32 {
    let x = raw as f32;
    let full = ADC_MAX_COUNTS as f32;
    match rating {
        2 => map_range(x, 0.0, full, TWO_BAR_MIN_PSIA, TWO_BAR_MAX_PSIA),
        3 => map_range(x, 0.0, full, THREE_BAR_MIN_PSIA, THREE_BAR_MAX_PSIA),
        _ => 0.0,
    }
}

/// 1 PSI = 0.0689475728 bar.
pub fn psi_to_bar(psi: f32) -> f32 {
    psi * 0.068_947_57
}

pub fn bar_to_psi(bar: f32) -> f32 {
    bar / 0.068_947_57
}

/// A calibrated MAP sensor with its captured atmospheric baseline.
#[derive(Debug, Clone, Copy)]
pub struct MapSensor {
    rating: u8,
    atm_psia: f32,
}

impl MapSensor {
    /// Build a sensor whose baseline has already been captured.
    /// `capture_baseline` is the usual constructor path.
    pub fn new(rating: u8, atm_psia: f32) -> Self {
        Self { rating, atm_psia }
    }

    /// Capture the atmospheric baseline from a raw reading taken while
    /// the engine is off.  Call exactly once, before any control mode
    /// is constructed.
    pub fn capture_baseline(rating: u8, raw: u16) -> Self {
        Self {
            rating,
            atm_psia: counts_to_psia(rating, raw),
        }
    }

    /// The captured atmospheric reference (PSIA).
    pub fn atm_psia(&self) -> f32 {
        self.atm_psia
    }

    /// Absolute pressure for a raw reading.
    pub fn psia(&self, raw: u16) -> f32 {
        counts_to_psia(self.rating, raw)
    }

    /// Gauge pressure (boost) for a raw reading: absolute minus the
    /// atmospheric baseline.
    pub fn gauge_psig(&self, raw: u16) -> f32 {
        self.psia(raw) - self.atm_psia
    }

    #[cfg(target_os = "espidf")]
    pub fn read_raw() -> u16 {
        crate::drivers::hw_init::adc1_read(crate::pins::MAP_ADC_CHANNEL)
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn read_raw() -> u16 {
        SIM_MAP_ADC.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_bar_endpoints() {
        assert!((counts_to_psia(3, 0) - THREE_BAR_MIN_PSIA).abs() < 1e-4);
        assert!((counts_to_psia(3, ADC_MAX_COUNTS) - THREE_BAR_MAX_PSIA).abs() < 1e-3);
    }

    #[test]
    fn two_bar_endpoints() {
        assert!((counts_to_psia(2, 0) - TWO_BAR_MIN_PSIA).abs() < 1e-4);
        assert!((counts_to_psia(2, ADC_MAX_COUNTS) - TWO_BAR_MAX_PSIA).abs() < 1e-3);
    }

    #[test]
    fn calibration_is_monotonic() {
        let mut prev = counts_to_psia(3, 0);
        for raw in (0..=ADC_MAX_COUNTS).step_by(64) {
            let p = counts_to_psia(3, raw);
            assert!(p >= prev, "pressure must not decrease with counts");
            prev = p;
        }
    }

    #[test]
    fn unknown_rating_reads_zero() {
        assert_eq!(counts_to_psia(0, 2048), 0.0);
        assert_eq!(counts_to_psia(5, 4095), 0.0);
    }

    #[test]
    fn gauge_subtracts_baseline() {
        // Ambient at ~14.7 PSIA on a 3-bar sensor.
        let ambient_raw =
            ((14.7 - THREE_BAR_MIN_PSIA) / (THREE_BAR_MAX_PSIA - THREE_BAR_MIN_PSIA)
                * ADC_MAX_COUNTS as f32) as u16;
        let sensor = MapSensor::capture_baseline(3, ambient_raw);
        assert!(sensor.gauge_psig(ambient_raw).abs() < 0.05);
        assert!(sensor.gauge_psig(ADC_MAX_COUNTS) > 0.0);
        assert!(sensor.gauge_psig(0) < 0.0);
    }

    #[test]
    fn bar_psi_roundtrip() {
        let psi = 14.5;
        assert!((bar_to_psi(psi_to_bar(psi)) - psi).abs() < 1e-3);
        assert!((psi_to_bar(14.5) - 1.0).abs() < 0.01);
    }
}
