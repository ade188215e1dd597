//! Delimiter-framed telemetry sink.
//!
//! Frames closed-loop telemetry records for the companion logging app:
//! each frame is `!<record>;<field>;…|` with `;` separators.  A
//! `format` record naming the field order is sent exactly once, before
//! any `log` record, so the receiver can parse positionally:
//!
//! ```text
//! !format;timestamp;setpoint;map_reading;duty_cycle;kp;ki;kd|
//! !log;1250;13.00;12.40;186;12.000;3.000;0.250|
//! ```
//!
//! Frames go to stdout, which ESP-IDF routes to the UART console
//! alongside the log output; the receiver keys on the `!`/`|`
//! delimiters to pick frames out of the interleaved stream.

use core::fmt::Write;
use std::io;

use heapless::String;

use crate::app::events::{AppEvent, TelemetryRecord};
use crate::app::ports::EventSink;

/// Maximum frame length.
const FRAME_CAP: usize = 96;

pub type Frame = String<FRAME_CAP>;

/// Build the one-time field-order announcement.
pub fn format_frame() -> Frame {
    let mut f = Frame::new();
    let _ = f.push_str("!format;timestamp;setpoint;map_reading;duty_cycle;kp;ki;kd|");
    f
}

/// Frame one telemetry record in the announced field order.
pub fn log_frame(rec: &TelemetryRecord) -> Frame {
    let mut f = Frame::new();
    let _ = write!(
        f,
        "!log;{};{:.2};{:.2};{};{:.3};{:.3};{:.3}|",
        rec.timestamp_ms, rec.setpoint, rec.map_reading, rec.duty_cycle, rec.kp, rec.ki, rec.kd,
    );
    f
}

/// Adapter that frames telemetry records onto a byte stream.  In
/// production the stream is stdout (UART); tests inject a buffer.
pub struct SerialTelemetrySink<W: io::Write = io::Stdout> {
    out: W,
    format_sent: bool,
}

impl SerialTelemetrySink<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for SerialTelemetrySink<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: io::Write> SerialTelemetrySink<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            format_sent: false,
        }
    }

    pub fn writer(&self) -> &W {
        &self.out
    }
}

impl<W: io::Write> EventSink for SerialTelemetrySink<W> {
    fn emit(&mut self, event: &AppEvent) {
        let AppEvent::Telemetry(rec) = event else {
            return;
        };
        // Stream write failure is not actionable mid-loop; drop the frame.
        if !self.format_sent {
            let _ = writeln!(self.out, "{}", format_frame());
            self.format_sent = true;
        }
        let _ = writeln!(self.out, "{}", log_frame(rec));
    }
}
