//! Error types for the checkout simulator.
//!
//! Validation failures are not errors: they travel as
//! [`ValidationErrors`](crate::transaction::ValidationErrors) values and never
//! abort processing.

use thiserror::Error;

/// Result type alias for checkout operations
pub type Result<T> = std::result::Result<T, CheckoutError>;

/// Errors that can occur while driving the checkout flow.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// Failed to open or read the input file, or to write a receipt
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Missing input file argument
    #[error("Missing input file argument. Usage: checkout-sim <submissions.csv> [--receipts-dir <dir>] [--no-delay]")]
    MissingArgument,

    /// Unrecognized command-line flag
    #[error("Unknown flag: {flag}")]
    UnknownFlag { flag: String },

    /// A flag that requires a value was given without one
    #[error("Flag {flag} requires a value")]
    MissingFlagValue { flag: String },
}
