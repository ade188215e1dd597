//! Open-loop mode: a fixed, operator-adjusted solenoid duty.
//!
//! No feedback — the duty byte goes straight to the solenoid every
//! tick and the up/down buttons nudge it by one count, saturating at
//! the actuator limits.

use core::fmt::Write;

use super::engine::BoostMode;
use super::mode::{ControlMode, StatusLine};
use crate::app::ports::BoostIo;
use crate::config::BoostConfig;

pub struct OpenLoopMode {
    duty: u8,
}

impl OpenLoopMode {
    pub fn new(config: &BoostConfig) -> Self {
        Self {
            duty: config.open_loop_init_duty,
        }
    }

    pub fn duty(&self) -> u8 {
        self.duty
    }
}

impl ControlMode for OpenLoopMode {
    fn id(&self) -> BoostMode {
        BoostMode::OpenLoop
    }

    fn header(&self) -> &'static str {
        "EBC:   Open Loop"
    }

    fn on_increase_request(&mut self) {
        self.duty = self.duty.saturating_add(1);
    }

    fn on_decrease_request(&mut self) {
        self.duty = self.duty.saturating_sub(1);
    }

    fn update(&mut self, io: &mut dyn BoostIo) {
        io.set_solenoid_duty(self.duty);
    }

    fn render_status(&self) -> StatusLine {
        let mut line = StatusLine::new();
        // Boost figure is a carried-over placeholder: open loop has no
        // pressure target, the field keeps the line layout stable.
        let _ = write!(line, "D {} B 12.7 PSI", self.duty);
        line
    }
}
