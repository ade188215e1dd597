//! Port traits — the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ BoostService (domain)
//! ```
//!
//! Driven adapters (buttons, MAP sensor, solenoid, display, event
//! sinks) implement these traits.  The
//! [`BoostService`](super::service::BoostService) consumes them via
//! generics, so the domain core never touches hardware directly.

// ───────────────────────────────────────────────────────────────
// Input port (driven adapter: buttons → domain)
// ───────────────────────────────────────────────────────────────

/// Raw (undebounced) button levels.  The domain owns the debouncing;
/// adapters only report the instantaneous logic level.
pub trait InputPort {
    /// Instantaneous logic level of the pin (true = pressed).
    fn raw_level(&mut self, gpio: i32) -> bool;
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: MAP sensor → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: calibrated boost gauge pressure.
pub trait SensorPort {
    /// Manifold gauge pressure in PSIG (absolute minus the atmospheric
    /// baseline captured at startup).  Negative under vacuum.
    fn boost_psig(&mut self) -> f32;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → solenoid)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain commands the boost solenoid through this.
pub trait ActuatorPort {
    /// Drive the solenoid at the given 8-bit duty.
    fn set_solenoid_duty(&mut self, duty: u8);

    /// De-energise the solenoid (wastegate on spring pressure).
    fn solenoid_fail_safe(&mut self);
}

/// Combined sensor/actuator view the control modes see during a tick.
/// Blanket-implemented so any adapter satisfying both ports qualifies.
pub trait BoostIo: SensorPort + ActuatorPort {}

impl<T: SensorPort + ActuatorPort> BoostIo for T {}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → character display)
// ───────────────────────────────────────────────────────────────

/// Two-line character display.  Lines longer than the panel are
/// truncated by the adapter.
pub trait DisplayPort {
    /// Write the mode header (top line).
    fn show_header(&mut self, line: &str);

    /// Write the live status (bottom line).
    fn show_status(&mut self, line: &str);

    /// Blank the status line (Off mode).
    fn clear_status(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go — serial log,
/// framed telemetry stream, test capture buffer.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
