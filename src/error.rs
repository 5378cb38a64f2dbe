// In: src/error.rs

//! This module defines the single, unified error type for the sample-natives library.
//! It uses the `thiserror` crate, and every variant maps onto a stable status code
//! so that failures can cross the C boundary without unwinding.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SampleError {
    // =========================================================================
    // === Contract Violations
    // =========================================================================
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Buffer out of bounds: needed {needed} elements, only {available} available")]
    OutOfBounds { needed: usize, available: usize },

    // =========================================================================
    // === External Error Wrappers
    // =========================================================================
    /// An error from the Serde JSON library while reading a configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// An error from the I/O subsystem (e.g., the log file could not be opened).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SampleError>;

/// Status code returned across the C boundary on success.
pub const STATUS_OK: i32 = 0;

impl SampleError {
    /// The negative status code reported to C callers for this error.
    pub fn status_code(&self) -> i32 {
        match self {
            SampleError::InvalidArgument(_) => -1,
            SampleError::OutOfBounds { .. } => -2,
            SampleError::Config(_) => -3,
            SampleError::Io(_) => -4,
        }
    }
}
