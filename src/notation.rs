//! Reading the `value±delta` notation.
//!
//! The accepted forms are `<value>` (an exact number) and `<value>±<delta>`.
//! Whitespace anywhere in the text is ignored, and the sign of the delta is
//! dropped. Both parts use the usual `f64` literal syntax, scientific notation
//! included.

use crate::ApproximateNumber;
use crate::error::ParseError;
use std::str::FromStr;

/// The uncertainty sign separating value and delta (U+00B1).
pub const SEPARATOR: char = '±';

impl ApproximateNumber {
    /// Parses an approximate number from text.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::Value`] or [`ParseError::Delta`] when either part
    /// is not a float, and [`ParseError::Structure`] when the text contains
    /// more than one separator.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let n = ApproximateNumber::parse("4.2 ± 0.3").unwrap();
    /// assert_eq!(n, ApproximateNumber::new(4.2, 0.3));
    ///
    /// let exact = ApproximateNumber::parse("-1.23").unwrap();
    /// assert!(exact.is_exact());
    /// ```
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let stripped: String = text.chars().filter(|c| !c.is_whitespace()).collect();
        let separators = stripped.matches(SEPARATOR).count();
        if separators > 1 {
            tracing::debug!(input = %stripped, separators, "too many separators");
            return Err(ParseError::Structure {
                input: stripped,
                separators,
            });
        }

        match stripped.split_once(SEPARATOR) {
            None => Ok(Self::exact(parse_value(&stripped)?)),
            Some((value, delta)) => {
                let value = parse_value(value)?;
                let delta = delta.parse::<f64>().map_err(|_| {
                    tracing::debug!(token = delta, "malformed delta");
                    ParseError::Delta {
                        input: delta.to_string(),
                    }
                })?;
                Ok(Self::new(value, delta))
            }
        }
    }
}

fn parse_value(token: &str) -> Result<f64, ParseError> {
    token.parse::<f64>().map_err(|_| {
        tracing::debug!(token, "malformed value");
        ParseError::Value {
            input: token.to_string(),
        }
    })
}

impl FromStr for ApproximateNumber {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
