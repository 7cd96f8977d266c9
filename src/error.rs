//! Error types for frameplot operations.
//!
//! End of stream and user interrupts are not errors: the first ends the
//! record sequence, the second ends the process with status 0.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while reading frames, loading configuration, or
/// driving the terminal.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error from the input stream, the echo channel, or the terminal.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Invalid configuration value.
    #[error("invalid configuration value for '{key}': {message}")]
    ConfigInvalid {
        /// The configuration key with invalid value.
        key: String,
        /// Error message describing why the value is invalid.
        message: String,
    },

    /// Interrupt handler could not be installed.
    #[error("failed to install interrupt handler: {0}")]
    Signal(#[from] ctrlc::Error),
}
