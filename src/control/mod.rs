//! Control core: PID regulator, the per-mode behaviours, and the
//! engine that dispatches between them.

pub mod closed_loop;
pub mod engine;
pub mod mode;
pub mod open_loop;
pub mod pid;
