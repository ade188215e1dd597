//! Outbound application events.
//!
//! The [`BoostService`](super::service::BoostService) emits these
//! through the [`EventSink`](super::ports::EventSink) port.  Adapters
//! on the other side decide what to do with them — log to serial,
//! frame onto the telemetry stream, capture in a test buffer.

use crate::control::engine::BoostMode;

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started (carries the initial mode).
    Started(BoostMode),

    /// The operator toggled between modes.
    ModeChanged { from: BoostMode, to: BoostMode },

    /// Per-tick closed-loop telemetry record.
    Telemetry(TelemetryRecord),
}

/// One closed-loop regulation sample, suitable for the framed serial
/// stream.  Field order here is the wire order declared by the format
/// record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetryRecord {
    /// Milliseconds since service start.
    pub timestamp_ms: u64,
    /// Target gauge pressure (PSIG).
    pub setpoint: f32,
    /// Measured gauge pressure (PSIG).
    pub map_reading: f32,
    /// Solenoid duty commanded this tick.
    pub duty_cycle: u8,
    pub kp: f32,
    pub ki: f32,
    pub kd: f32,
}
