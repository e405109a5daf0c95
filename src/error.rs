//! Error types for the approximate-rs library.
//!
//! Only two things can go wrong: building an interval whose bounds are
//! inverted, and reading the `value±delta` notation. Every other operation is
//! total over `f64` and reports degenerate input through IEEE-754 special
//! values instead.

use thiserror::Error;

/// Errors produced while reading the `value±delta` notation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The central value is not a floating point literal.
    #[error("Invalid value: could not parse '{input}' as a float")]
    Value {
        /// The offending token
        input: String,
    },

    /// The delta is not a floating point literal.
    #[error("Invalid delta: could not parse '{input}' as a float")]
    Delta {
        /// The offending token
        input: String,
    },

    /// The text contains more than one uncertainty separator.
    #[error("Invalid notation: '{input}' contains {separators} separators, expected at most one")]
    Structure {
        /// The whitespace-stripped input
        input: String,
        /// How many separators were found
        separators: usize,
    },
}

/// The main error type for the approximate-rs library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApproxError {
    /// Error when an interval is requested with `max < min`.
    #[error("Invalid range: max {max} is less than min {min}")]
    InvalidRange {
        /// The requested lower bound
        min: f64,
        /// The requested upper bound
        max: f64,
    },

    /// Error when text could not be read as an approximate number.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// A specialized `Result` type for approximate number construction.
///
/// This is a convenience type alias for `Result<T, ApproxError>`.
pub type Result<T> = std::result::Result<T, ApproxError>;

impl ApproxError {
    /// Create an error for an inverted interval.
    ///
    /// # Example
    /// ```
    /// use approximate_rs::error::ApproxError;
    ///
    /// let error = ApproxError::invalid_range(3.0, 1.0);
    /// assert!(error.to_string().contains("less than min 3"));
    /// ```
    #[must_use]
    pub fn invalid_range(min: f64, max: f64) -> Self {
        Self::InvalidRange { min, max }
    }
}

impl ParseError {
    /// The text the error refers to.
    #[must_use]
    pub fn input(&self) -> &str {
        match self {
            ParseError::Value { input }
            | ParseError::Delta { input }
            | ParseError::Structure { input, .. } => input,
        }
    }
}
