//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to
//! the ESP-IDF logger (which goes to UART / USB-CDC in production).
//! The framed telemetry stream is a separate adapter; this one is the
//! human-readable view.

use log::info;

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | t={}ms | target={:.1}psi | map={:.1}psi | duty={}",
                    t.timestamp_ms, t.setpoint, t.map_reading, t.duty_cycle,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE | {:?} -> {:?}", from, to);
            }
            AppEvent::Started(mode) => {
                info!("START | initial_mode={:?}", mode);
            }
        }
    }
}
