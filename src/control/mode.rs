//! The per-mode behaviour contract.
//!
//! Each operating mode implements [`ControlMode`]; the
//! [`BoostEngine`](super::engine::BoostEngine) dispatches button edges
//! and the periodic update to whichever mode is active.  Request and
//! lifecycle hooks default to no-ops so a mode only overrides what it
//! reacts to.

use heapless::String;

use super::engine::BoostMode;
use crate::app::ports::BoostIo;

/// A single rendered display line, sized to the panel width.
pub type StatusLine = String<{ crate::pins::LCD_COLS }>;

pub trait ControlMode {
    /// Which [`BoostMode`] this instance implements.
    fn id(&self) -> BoostMode;

    /// Fixed 16-character header shown while this mode is active.
    fn header(&self) -> &'static str;

    /// Operator pressed the increase button.
    fn on_increase_request(&mut self) {}

    /// Operator pressed the decrease button.
    fn on_decrease_request(&mut self) {}

    /// Mode became active (runs before its first `update`).
    fn on_activate(&mut self, _io: &mut dyn BoostIo) {}

    /// Mode is being left (runs before the next mode's `on_activate`).
    fn on_deactivate(&mut self, _io: &mut dyn BoostIo) {}

    /// One control tick: read sensors, command the actuator.
    fn update(&mut self, io: &mut dyn BoostIo);

    /// Render the live status line for the display.
    fn render_status(&self) -> StatusLine;
}
