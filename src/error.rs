//! Unified error types for the codepad controller.
//!
//! None of these are fatal.  The controller reports them to the caller and
//! keeps ticking; only the firmware bootstrap treats `Init` as a reason to
//! stop.  All variants are `Copy` so they pass through the FSM context
//! without allocation.

use core::fmt;

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The transcript already holds its maximum number of bytes.
    CapacityExceeded,
    /// A commit was requested before all eight bits were entered.
    CodeIncomplete,
    /// Configuration is invalid or could not be parsed.
    Config(&'static str),
    /// Peripheral initialisation failed.
    Init(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded => write!(f, "transcript capacity exceeded"),
            Self::CodeIncomplete => write!(f, "code incomplete"),
            Self::Config(msg) => write!(f, "config: {msg}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

/// Controller-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
