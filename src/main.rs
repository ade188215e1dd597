//! Boost Controller Firmware — Main Entry Point
//!
//! Hexagonal architecture with event-driven execution.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Adapters (outer ring)                  │
//! │                                                          │
//! │  HardwareAdapter        PanelDisplay     LogEventSink    │
//! │  (Input+Sensor+Actuator)(DisplayPort)    (EventSink)     │
//! │                         SerialTelemetrySink (EventSink)  │
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────       │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────┐      │
//! │  │           BoostService (pure logic)            │      │
//! │  │  Debounce · Mode engine · PID                  │      │
//! │  └────────────────────────────────────────────────┘      │
//! └──────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

// ── Module declarations ───────────────────────────────────────
pub mod config;
mod error;
mod events;
mod pins;

mod adapters;
pub mod app;
mod control;
mod drivers;
mod sensors;

// ── Imports ───────────────────────────────────────────────────
use anyhow::Result;
use log::info;

use adapters::display::PanelDisplay;
use adapters::hardware::HardwareAdapter;
use adapters::log_sink::LogEventSink;
use adapters::serial_telemetry::SerialTelemetrySink;
use app::events::AppEvent;
use app::ports::EventSink;
use app::service::BoostService;
use config::BoostConfig;
use drivers::solenoid::SolenoidDriver;
use events::Event;
use sensors::map::MapSensor;

/// Fan both structured sinks out from one `EventSink` seam: the
/// human-readable log and the framed telemetry stream.
struct DualSink {
    log: LogEventSink,
    telemetry: SerialTelemetrySink,
}

impl EventSink for DualSink {
    fn emit(&mut self, event: &AppEvent) {
        self.log.emit(event);
        self.telemetry.emit(event);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    #[cfg(target_os = "espidf")]
    {
        esp_idf_svc::sys::link_patches();
        esp_idf_logger::init()?;
    }
    info!("boostctl v{}", env!("CARGO_PKG_VERSION"));

    // ── 2. Initialise hardware peripherals ────────────────────
    if let Err(e) = drivers::hw_init::init_peripherals() {
        // Peripheral init failure is critical — log and halt.
        // In production this triggers the watchdog reset after timeout.
        log::error!("{} — halting", error::Error::from(e));
        #[allow(clippy::empty_loop)]
        loop {}
    }
    let watchdog = drivers::watchdog::Watchdog::new();

    let config = BoostConfig::default();
    config.validate()?;

    // ── 3. Atmospheric baseline ───────────────────────────────
    // Captured before any mode is constructed; assumes the engine is
    // off at boot so the manifold sits at ambient pressure.
    let baseline_raw = average_map_raw(8);
    let map = MapSensor::capture_baseline(config.map_sensor_rating, baseline_raw);
    info!(
        "MAP baseline: raw={} atm={:.2} PSIA ({}-bar sensor)",
        baseline_raw,
        map.atm_psia(),
        config.map_sensor_rating
    );

    // ── 4. Construct adapters ─────────────────────────────────
    let mut hw = HardwareAdapter::new(map, SolenoidDriver::new());
    let mut display = PanelDisplay::new();
    let mut sink = DualSink {
        log: LogEventSink::new(),
        telemetry: SerialTelemetrySink::new(),
    };

    // ── 5. Construct app service ──────────────────────────────
    let mut app = BoostService::new(&config);
    app.start(&mut sink);

    drivers::hw_timer::start_timers(config.control_loop_interval_ms, config.display_refresh_ms);
    info!("System ready. Entering event loop.");

    // ── 6. Event loop ─────────────────────────────────────────
    #[cfg(not(target_os = "espidf"))]
    let display_every = (config.display_refresh_ms / config.control_loop_interval_ms).max(1) as u64;

    loop {
        // Simulate timer interrupts via sleep on non-espidf targets.
        // On real hardware, esp_timer callbacks push the events.
        #[cfg(not(target_os = "espidf"))]
        {
            std::thread::sleep(std::time::Duration::from_millis(
                config.control_loop_interval_ms as u64,
            ));
            events::push_event(Event::ControlTick);
            if app.tick_count() % display_every == 0 {
                events::push_event(Event::DisplayTick);
            }
        }

        events::drain_events(|event| match event {
            Event::ControlTick => app.control_tick(&mut hw, &mut sink),
            Event::DisplayTick => app.display_tick(&mut display),
        });

        // Feed watchdog on every iteration.
        watchdog.feed();

        // On device the timer task wakes us; yield between drains.
        #[cfg(target_os = "espidf")]
        std::thread::sleep(std::time::Duration::from_millis(5));
    }
}

/// Average several raw MAP reads to take the noise out of the one-shot
/// baseline capture.
fn average_map_raw(samples: u32) -> u16 {
    let mut acc: u32 = 0;
    for _ in 0..samples.max(1) {
        acc += MapSensor::read_raw() as u32;
    }
    (acc / samples.max(1)) as u16
}
