//! 16x2 status panel adapter.
//!
//! Keeps a two-line framebuffer padded to the panel width and pushes a
//! line out only when its content changes, so the slow display bus (or
//! the console renderer on the host) is not rewritten every refresh.
//! Lines longer than the panel are truncated.

use heapless::String;
use log::info;

use crate::app::ports::DisplayPort;
use crate::pins::LCD_COLS;

type Line = String<LCD_COLS>;

/// Pad/truncate to exactly the panel width.
fn fit(text: &str) -> Line {
    let mut line = Line::new();
    for ch in text.chars().take(LCD_COLS) {
        if line.push(ch).is_err() {
            break;
        }
    }
    while line.push(' ').is_ok() {}
    line
}

pub struct PanelDisplay {
    header: Line,
    status: Line,
}

impl PanelDisplay {
    pub fn new() -> Self {
        Self {
            header: fit(""),
            status: fit(""),
        }
    }

    pub fn header_line(&self) -> &str {
        self.header.as_str()
    }

    pub fn status_line(&self) -> &str {
        self.status.as_str()
    }

    fn paint(&self) {
        info!(target: "panel", "[{}]", self.header);
        info!(target: "panel", "[{}]", self.status);
    }
}

impl Default for PanelDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayPort for PanelDisplay {
    fn show_header(&mut self, line: &str) {
        let next = fit(line);
        if next != self.header {
            self.header = next;
            self.paint();
        }
    }

    fn show_status(&mut self, line: &str) {
        let next = fit(line);
        if next != self.status {
            self.status = next;
            self.paint();
        }
    }

    fn clear_status(&mut self) {
        self.show_status("");
    }
}
