//! Error types for curve operations.
//!
//! This module provides structured error handling for curve construction
//! and rate lookup.

use pillar_core::types::Date;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone)]
pub enum CurveError {
    /// Query date precedes the curve's anchor date.
    #[error("Date {requested} is before the curve's first date {anchor}")]
    DateBeforeCurve {
        /// The rejected query date.
        requested: Date,
        /// The curve's anchor date.
        anchor: Date,
    },

    /// Input sequences have different lengths.
    #[error("Input length mismatch: {dates} dates, {bids} bid rates, {asks} ask rates")]
    LengthMismatch {
        /// Number of dates supplied.
        dates: usize,
        /// Number of bid rates supplied.
        bids: usize,
        /// Number of ask rates supplied.
        asks: usize,
    },

    /// Not enough pillars to build a curve.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required pillars.
        required: usize,
        /// Actual number of pillars provided.
        got: usize,
    },

    /// Quote dates are not strictly ascending.
    #[error("Non-monotonic dates at index {index}: {prev} >= {current}")]
    NonMonotonicDates {
        /// Index where the monotonicity violation occurred.
        index: usize,
        /// Preceding date.
        prev: Date,
        /// Offending date.
        current: Date,
    },
}

impl CurveError {
    /// Creates a date-before-curve error.
    #[must_use]
    pub fn date_before_curve(requested: Date, anchor: Date) -> Self {
        Self::DateBeforeCurve { requested, anchor }
    }

    /// Creates a length mismatch error.
    #[must_use]
    pub fn length_mismatch(dates: usize, bids: usize, asks: usize) -> Self {
        Self::LengthMismatch { dates, bids, asks }
    }

    /// Creates an insufficient points error.
    #[must_use]
    pub fn insufficient_points(required: usize, got: usize) -> Self {
        Self::InsufficientPoints { required, got }
    }

    /// Creates a non-monotonic dates error.
    #[must_use]
    pub fn non_monotonic_dates(index: usize, prev: Date, current: Date) -> Self {
        Self::NonMonotonicDates {
            index,
            prev,
            current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_before_curve_display() {
        let anchor = Date::from_ymd(2024, 5, 17).unwrap();
        let requested = Date::from_ymd(2024, 5, 16).unwrap();
        let err = CurveError::date_before_curve(requested, anchor);
        let msg = format!("{}", err);
        assert!(msg.contains("2024-05-16"));
        assert!(msg.contains("before the curve's first date"));
    }

    #[test]
    fn test_length_mismatch_display() {
        let err = CurveError::length_mismatch(9, 9, 8);
        let msg = format!("{}", err);
        assert!(msg.contains("mismatch"));
        assert!(msg.contains("8 ask rates"));
    }

    #[test]
    fn test_non_monotonic_dates_display() {
        let prev = Date::from_ymd(2024, 8, 15).unwrap();
        let current = Date::from_ymd(2024, 8, 15).unwrap();
        let err = CurveError::non_monotonic_dates(2, prev, current);
        let msg = format!("{}", err);
        assert!(msg.contains("Non-monotonic"));
        assert!(msg.contains("index 2"));
    }
}
