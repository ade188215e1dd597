//! Application service — the hexagonal core.
//!
//! [`BoostService`] owns the debounced inputs and the mode engine.  It
//! exposes a clean, hardware-agnostic API.  All I/O flows through port
//! traits injected at call sites, making the entire service testable
//! with mock adapters.
//!
//! ```text
//!    InputPort ──▶ ┌────────────────────────┐ ──▶ EventSink
//!   SensorPort ──▶ │      BoostService       │
//! ActuatorPort ◀── │  Debounce · Modes · PID │ ──▶ DisplayPort
//!                  └────────────────────────┘
//! ```

use log::info;

use crate::config::BoostConfig;
use crate::control::engine::{BoostEngine, BoostMode};
use crate::drivers::debounce::DebouncedInput;
use crate::pins;

use super::events::AppEvent;
use super::ports::{ActuatorPort, DisplayPort, EventSink, InputPort, SensorPort};

// ───────────────────────────────────────────────────────────────
// BoostService
// ───────────────────────────────────────────────────────────────

/// The application service orchestrates all domain logic.
pub struct BoostService {
    engine: BoostEngine,
    up_btn: DebouncedInput,
    down_btn: DebouncedInput,
    mode_btn: DebouncedInput,
    /// Milliseconds per control tick (drives the telemetry timestamp).
    tick_interval_ms: u32,
    /// Emit a telemetry record every N control ticks.
    telemetry_every: u64,
    tick_count: u64,
}

impl BoostService {
    /// Construct the service from configuration.  Starts Off with the
    /// solenoid at its fail-safe level.
    pub fn new(config: &BoostConfig) -> Self {
        let btn = |gpio| DebouncedInput::new(gpio, config.btn_debounce_secs, config.btn_sample_hz);
        Self {
            engine: BoostEngine::new(config),
            up_btn: btn(pins::UP_BTN_GPIO),
            down_btn: btn(pins::DOWN_BTN_GPIO),
            mode_btn: btn(pins::MODE_BTN_GPIO),
            tick_interval_ms: config.control_loop_interval_ms,
            telemetry_every: (config.telemetry_interval_ms / config.control_loop_interval_ms)
                .max(1) as u64,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Announce startup through the sink.
    pub fn start(&mut self, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Started(self.engine.current()));
        info!("BoostService started in {:?}", self.engine.current());
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: sample buttons → toggle → dispatch
    /// the active mode → telemetry.
    ///
    /// The `hw` parameter satisfies all three hardware-facing ports —
    /// this avoids a double mutable borrow while keeping the port
    /// boundary explicit.
    pub fn control_tick(
        &mut self,
        hw: &mut (impl InputPort + SensorPort + ActuatorPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Sample the raw button levels through the debouncers.
        for btn in [&mut self.up_btn, &mut self.down_btn, &mut self.mode_btn] {
            let raw = hw.raw_level(btn.gpio());
            btn.sample(raw);
        }

        // 2. Mode toggle edge — at most one per tick by construction.
        if self.mode_btn.consume_activation() {
            let from = self.engine.current();
            self.engine.toggle();
            sink.emit(&AppEvent::ModeChanged {
                from,
                to: self.engine.current(),
            });
        }

        // 3. Dispatch edges and the periodic update to the active mode.
        // Edges are consumed every tick, including while Off — a press
        // latched during Off is dropped here rather than held until the
        // next mode activates.
        let up = self.up_btn.consume_activation();
        let down = self.down_btn.consume_activation();
        self.engine.dispatch(up, down, hw);

        // 4. Telemetry flows only while closed-loop regulation is live.
        if self.engine.current() == BoostMode::ClosedLoop
            && self.tick_count % self.telemetry_every == 0
        {
            let record = self.engine.closed_loop().telemetry(self.uptime_ms());
            sink.emit(&AppEvent::Telemetry(record));
        }
    }

    /// Repaint both display lines.  Runs at the (slower) display
    /// cadence; Off blanks the status line.
    pub fn display_tick(&mut self, display: &mut impl DisplayPort) {
        display.show_header(self.engine.header());
        match self.engine.render_status() {
            Some(line) => display.show_status(line.as_str()),
            None => display.clear_status(),
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Currently selected operating mode.
    pub fn mode(&self) -> BoostMode {
        self.engine.current()
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Milliseconds since startup, derived from the tick counter.
    pub fn uptime_ms(&self) -> u64 {
        self.tick_count * self.tick_interval_ms as u64
    }
}
