//! Error types for the stepper.

use thiserror::Error;

/// Result type for stepper operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when controlling a stepper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A run is already attached; reset before starting another.
    #[error("stepper is already running; reset it before starting a new run")]
    AlreadyRunning,
}
