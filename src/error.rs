//! Unified error types for the servo mode controller.
//!
//! A single `Error` enum that every subsystem can convert into. Only the two
//! init variants are fatal; after startup the control loop has no error path.

use core::fmt;

/// Every fallible operation in the controller funnels into this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The GPIO subsystem (button and LED pins) could not be initialised.
    PeripheralInit(String),
    /// The hardware PWM subsystem driving the servo could not be initialised.
    PwmInit(String),
    /// A peripheral read or write failed after startup.
    PeripheralIo(String),
    /// Configuration is internally inconsistent.
    Config(&'static str),
}

impl Error {
    /// Process exit status for this error when it aborts startup.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeripheralInit(cause) => write!(f, "GPIO init failed: {cause}"),
            Self::PwmInit(cause) => write!(f, "PWM init failed: {cause}"),
            Self::PeripheralIo(cause) => write!(f, "peripheral I/O: {cause}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
