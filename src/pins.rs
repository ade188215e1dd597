//! GPIO / peripheral pin assignments for the boost controller main board.
//!
//! Single source of truth — every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Operator buttons (momentary, active-high with external pull-down)
// ---------------------------------------------------------------------------

/// Raise the setpoint / open-loop duty cycle.
pub const UP_BTN_GPIO: i32 = 8;
/// Lower the setpoint / open-loop duty cycle.
pub const DOWN_BTN_GPIO: i32 = 9;
/// Cycle the operating mode (Off → Open Loop → Closed Loop → Off).
pub const MODE_BTN_GPIO: i32 = 10;

// ---------------------------------------------------------------------------
// Boost control solenoid (low-side MOSFET driver)
// ---------------------------------------------------------------------------

/// LEDC PWM channel driving the solenoid MOSFET gate.
/// Duty 0 = de-energised — the wastegate runs off spring pressure.
pub const SOLENOID_PWM_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// MAP sensor — Analog (ADC1)
// ---------------------------------------------------------------------------

/// Manifold absolute pressure sensor — ratiometric analog output.
/// ADC1 channel 4 (GPIO 5 on ESP32-S3).
pub const MAP_ADC_GPIO: i32 = 5;
/// ADC1 channel number for [`MAP_ADC_GPIO`].
pub const MAP_ADC_CHANNEL: u32 = 4;

/// Full-scale ADC reading (12-bit SAR).
pub const ADC_MAX_COUNTS: u16 = 4095;

// ---------------------------------------------------------------------------
// Character display (16x2)
// ---------------------------------------------------------------------------

/// Display geometry.
pub const LCD_COLS: usize = 16;
pub const LCD_ROWS: usize = 2;

// ---------------------------------------------------------------------------
// PWM configuration
// ---------------------------------------------------------------------------

/// LEDC timer resolution (bits).  8-bit gives 0 – 255 duty levels.
pub const PWM_RESOLUTION_BITS: u32 = 8;
/// LEDC base frequency for the solenoid valve (30 Hz — matches the
/// valve's mechanical response band).
pub const SOLENOID_PWM_FREQ_HZ: u32 = 30;
