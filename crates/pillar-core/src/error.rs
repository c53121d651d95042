//! Error types for the Pillar core library.
//!
//! This module defines the error type shared by the core surface,
//! providing structured error handling with context.

use thiserror::Error;

/// A specialized Result type for Pillar core operations.
pub type PillarResult<T> = Result<T, PillarError>;

/// The main error type for Pillar core operations.
#[derive(Error, Debug, Clone)]
pub enum PillarError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },
}

impl PillarError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }
}
