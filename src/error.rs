//! Error types for the Dock Booking Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while checking availability,
//! pricing a stay, or settling a cancellation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the Dock Booking Engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use dock_booking_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/pricing.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/pricing.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// A date range whose end is not strictly after its start.
    #[error("Invalid date range: end {end} must be after start {start}")]
    InvalidRange {
        /// The first day of the range.
        start: NaiveDate,
        /// The checkout day of the range.
        end: NaiveDate,
    },

    /// A currency amount that is negative.
    #[error("Invalid amount for '{field}': {value} (must not be negative)")]
    InvalidAmount {
        /// The name of the offending input.
        field: String,
        /// The rejected value.
        value: Decimal,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The loaded booking policy is internally inconsistent.
    #[error("Invalid booking policy: {message}")]
    InvalidPolicy {
        /// A description of what made the policy invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl EngineError {
    /// Creates an [`EngineError::InvalidAmount`] for the named field.
    pub fn invalid_amount(field: impl Into<String>, value: Decimal) -> Self {
        Self::InvalidAmount {
            field: field.into(),
            value,
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
