//! Mode dispatcher: owns the mode instances and routes edges and ticks.
//!
//! The engine tracks which mode the operator selected (`current`) and
//! which mode last received lifecycle hooks (`dispatched`).  The two
//! diverge for exactly one tick after a toggle; the next `dispatch`
//! closes the gap by running the outgoing mode's `on_deactivate` before
//! the incoming mode's `on_activate`, exactly once per transition.

use log::info;

use super::closed_loop::ClosedLoopMode;
use super::mode::{ControlMode, StatusLine};
use super::open_loop::OpenLoopMode;
use crate::app::ports::BoostIo;
use crate::config::BoostConfig;

/// Operating modes, in toggle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostMode {
    Off,
    OpenLoop,
    ClosedLoop,
}

pub const MODE_COUNT: usize = 3;

impl BoostMode {
    /// Cyclic successor: Off → OpenLoop → ClosedLoop → Off.
    pub fn next(self) -> Self {
        match self {
            Self::Off => Self::OpenLoop,
            Self::OpenLoop => Self::ClosedLoop,
            Self::ClosedLoop => Self::Off,
        }
    }
}

const OFF_HEADER: &str = "EBC:     Off    ";

pub struct BoostEngine {
    open_loop: OpenLoopMode,
    closed_loop: ClosedLoopMode,
    current: BoostMode,
    /// Mode that last received lifecycle hooks; None before first dispatch.
    dispatched: Option<BoostMode>,
}

impl BoostEngine {
    /// Build the engine with both mode instances; starts Off.
    pub fn new(config: &BoostConfig) -> Self {
        Self {
            open_loop: OpenLoopMode::new(config),
            closed_loop: ClosedLoopMode::new(config),
            current: BoostMode::Off,
            dispatched: None,
        }
    }

    pub fn current(&self) -> BoostMode {
        self.current
    }

    /// Advance to the next mode.  Lifecycle hooks run on the next
    /// `dispatch`, not here — toggling is just a selection change.
    pub fn toggle(&mut self) {
        self.current = self.current.next();
        info!("mode toggled to {:?}", self.current);
    }

    /// Header line for the currently selected mode.
    pub fn header(&self) -> &'static str {
        match self.current {
            BoostMode::Off => OFF_HEADER,
            BoostMode::OpenLoop => self.open_loop.header(),
            BoostMode::ClosedLoop => self.closed_loop.header(),
        }
    }

    /// Status line for the active mode; None while Off (cleared line).
    pub fn render_status(&self) -> Option<StatusLine> {
        match self.current {
            BoostMode::Off => None,
            BoostMode::OpenLoop => Some(self.open_loop.render_status()),
            BoostMode::ClosedLoop => Some(self.closed_loop.render_status()),
        }
    }

    pub fn closed_loop(&self) -> &ClosedLoopMode {
        &self.closed_loop
    }

    /// Run one control tick: settle any pending transition, then route
    /// the button edges and the periodic update to the active mode.
    /// While Off, the solenoid is forced to its fail-safe level instead.
    pub fn dispatch(&mut self, up_edge: bool, down_edge: bool, io: &mut dyn BoostIo) {
        if self.dispatched != Some(self.current) {
            if let Some(prev) = self.dispatched {
                if let Some(mode) = Self::instance(&mut self.open_loop, &mut self.closed_loop, prev)
                {
                    mode.on_deactivate(io);
                }
            }
            if let Some(mode) =
                Self::instance(&mut self.open_loop, &mut self.closed_loop, self.current)
            {
                mode.on_activate(io);
            }
            self.dispatched = Some(self.current);
        }

        match Self::instance(&mut self.open_loop, &mut self.closed_loop, self.current) {
            None => io.solenoid_fail_safe(),
            Some(mode) => {
                if up_edge {
                    mode.on_increase_request();
                }
                if down_edge {
                    mode.on_decrease_request();
                }
                mode.update(io);
            }
        }
    }

    /// Off has no instance; the other modes resolve to their state.
    /// Free-standing over the two fields so the borrow stays disjoint
    /// from `self.current`.
    fn instance<'a>(
        open_loop: &'a mut OpenLoopMode,
        closed_loop: &'a mut ClosedLoopMode,
        mode: BoostMode,
    ) -> Option<&'a mut dyn ControlMode> {
        match mode {
            BoostMode::Off => None,
            BoostMode::OpenLoop => Some(open_loop),
            BoostMode::ClosedLoop => Some(closed_loop),
        }
    }
}
