//! Unified error types for the boost controller firmware.
//!
//! The control core itself never errors — invalid inputs degrade to safe
//! defaults (an unknown sensor rating reads 0 PSIA, setpoints clamp at
//! zero).  These types cover the boot path: peripheral init and
//! configuration validation, funnelled into one enum so the boot
//! sequence handles every failure uniformly.  All variants are `Copy`
//! so they pass around without allocation.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration is invalid.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

impl core::error::Error for Error {}

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
