//! Integrator-debounced digital input.
//!
//! A leaky counter filters the raw pin level: each sample moves the
//! integrator one step toward the raw state, and the logical output only
//! flips at the extremes (0 or the ceiling).  A glitch shorter than the
//! debounce window can never move the integrator far enough to toggle
//! the output.
//!
//! ```text
//! raw:    _/‾\_/‾‾‾‾‾‾‾‾‾\____
//! integ:  0 1 0 1 2=max  1 0
//! out:    ____/‾‾‾‾‾‾‾‾‾‾‾\__
//!              ▲ activation edge latched here
//! ```
//!
//! The activation edge is latched into a one-shot flag with
//! single-consumer semantics: `consume_activation()` returns `true`
//! exactly once per LOW→HIGH output transition.  Presses faster than
//! the consumer polls coalesce into a single edge.

/// Debounced digital input with one-shot press detection.
pub struct DebouncedInput {
    gpio: i32,
    /// Integrator ceiling: `ceil(debounce_secs * sample_hz)`.
    maximum: u16,
    /// Current integrator value, always in `[0, maximum]`.
    integrator: u16,
    /// Stable logical output.
    output: bool,
    /// Set on a LOW→HIGH output transition, cleared once when queried.
    unread_activation: bool,
}

impl DebouncedInput {
    /// Build an input with the given debounce window and sample rate.
    /// `sample()` must then be called at `sample_hz` — the rate is a
    /// scheduler obligation, not enforced here.
    pub fn new(gpio: i32, debounce_secs: f32, sample_hz: u16) -> Self {
        let maximum = (debounce_secs * sample_hz as f32).ceil().max(1.0) as u16;
        Self {
            gpio,
            maximum,
            integrator: 0,
            output: false,
            unread_activation: false,
        }
    }

    /// GPIO pin this input is attached to.
    pub fn gpio(&self) -> i32 {
        self.gpio
    }

    /// Integrator ceiling (samples of sustained input needed to flip).
    pub fn maximum(&self) -> u16 {
        self.maximum
    }

    /// Feed one raw sample.  Call at the configured sample rate.
    pub fn sample(&mut self, raw_active: bool) {
        let last_output = self.output;

        // Move the integrator one step toward the raw level.
        if !raw_active && self.integrator > 0 {
            self.integrator -= 1;
        } else if raw_active && self.integrator < self.maximum {
            self.integrator += 1;
        }

        // The output only flips at the integrator extremes.
        if self.integrator == 0 {
            self.output = false;
        } else if self.integrator >= self.maximum {
            self.output = true;
            self.integrator = self.maximum;

            if !last_output {
                // Fresh LOW→HIGH edge — latch it.  A still-unread flag
                // stays set: rapid presses coalesce into one edge.
                self.unread_activation = true;
            }
        }
    }

    /// Current stable logical state.
    pub fn is_active(&self) -> bool {
        self.output
    }

    /// One-shot press query: `true` exactly once per activation edge.
    pub fn consume_activation(&mut self) -> bool {
        if self.unread_activation {
            self.unread_activation = false;
            return true;
        }
        false
    }
}
