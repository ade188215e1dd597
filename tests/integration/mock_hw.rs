//! Mock hardware adapter for integration tests.
//!
//! Records every solenoid command so tests can assert on the full duty
//! history without touching real GPIO/PWM registers.

use boostctl::app::events::AppEvent;
use boostctl::app::ports::{ActuatorPort, DisplayPort, EventSink, InputPort, SensorPort};
use boostctl::pins;

// ── MockHardware ──────────────────────────────────────────────

pub struct MockHardware {
    /// Raw (undebounced) button levels fed to the service.
    pub up_level: bool,
    pub down_level: bool,
    pub mode_level: bool,
    /// Gauge pressure the MAP sensor reports.
    pub psig: f32,
    /// Every duty commanded, in order.  Fail-safe records as 0.
    pub duty_history: Vec<u8>,
    pub fail_safe_calls: u32,
}

#[allow(dead_code)]
impl MockHardware {
    pub fn new() -> Self {
        Self {
            up_level: false,
            down_level: false,
            mode_level: false,
            psig: 0.0,
            duty_history: Vec::new(),
            fail_safe_calls: 0,
        }
    }

    pub fn last_duty(&self) -> Option<u8> {
        self.duty_history.last().copied()
    }
}

impl Default for MockHardware {
    fn default() -> Self {
        Self::new()
    }
}

impl InputPort for MockHardware {
    fn raw_level(&mut self, gpio: i32) -> bool {
        match gpio {
            pins::UP_BTN_GPIO => self.up_level,
            pins::DOWN_BTN_GPIO => self.down_level,
            pins::MODE_BTN_GPIO => self.mode_level,
            _ => false,
        }
    }
}

impl SensorPort for MockHardware {
    fn boost_psig(&mut self) -> f32 {
        self.psig
    }
}

impl ActuatorPort for MockHardware {
    fn set_solenoid_duty(&mut self, duty: u8) {
        self.duty_history.push(duty);
    }

    fn solenoid_fail_safe(&mut self) {
        self.fail_safe_calls += 1;
        self.duty_history.push(0);
    }
}

// ── MockDisplay ───────────────────────────────────────────────

/// Records the last header/status lines written.
#[derive(Default)]
pub struct MockDisplay {
    pub header: String,
    pub status: String,
    pub status_cleared: bool,
}

#[allow(dead_code)]
impl MockDisplay {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayPort for MockDisplay {
    fn show_header(&mut self, line: &str) {
        self.header = line.to_string();
    }

    fn show_status(&mut self, line: &str) {
        self.status = line.to_string();
        self.status_cleared = false;
    }

    fn clear_status(&mut self) {
        self.status.clear();
        self.status_cleared = true;
    }
}

// ── CaptureSink ───────────────────────────────────────────────

/// Buffers every emitted event for inspection.
#[derive(Default)]
pub struct CaptureSink {
    pub events: Vec<AppEvent>,
}

#[allow(dead_code)]
impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn telemetry_records(&self) -> Vec<&boostctl::app::events::TelemetryRecord> {
        self.events
            .iter()
            .filter_map(|e| match e {
                AppEvent::Telemetry(rec) => Some(rec),
                _ => None,
            })
            .collect()
    }

    pub fn mode_changes(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, AppEvent::ModeChanged { .. }))
            .count()
    }
}

impl EventSink for CaptureSink {
    fn emit(&mut self, event: &AppEvent) {
        self.events.push(event.clone());
    }
}
