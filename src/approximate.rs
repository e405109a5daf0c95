use crate::error::{ApproxError, Result};
use crate::notation::SEPARATOR;
use std::fmt;

/// A number paired with a worst-case bound on its error.
///
/// An `ApproximateNumber` stands for the closed interval
/// `[value - delta, value + delta]`: the true quantity is somewhere in there,
/// and every operation on the type keeps that claim defensible. The delta is
/// always nonnegative.
///
/// Values are immutable. Every operation returns a new instance, and the
/// default value is the exact zero `0±0`.
///
/// Equality compares the two stored numbers as plain data. There is no
/// `PartialOrd` implementation; see [`Comparison`](crate::Comparison) for
/// the interval ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "Parts")
)]
pub struct ApproximateNumber {
    value: f64,
    delta: f64,
}

impl ApproximateNumber {
    /// Creates an approximate number from its central value and delta.
    ///
    /// The delta is stored as its absolute value, so `new(10.0, -1.0)` and
    /// `new(10.0, 1.0)` are the same number.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let width = ApproximateNumber::new(50.0, 0.5);
    /// assert_eq!(width, ApproximateNumber::new(50.0, -0.5));
    /// assert_eq!(width.delta(), 0.5);
    /// ```
    #[must_use]
    pub fn new(value: f64, delta: f64) -> Self {
        Self {
            value,
            delta: delta.abs(),
        }
    }

    /// Creates a number known without error.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let two = ApproximateNumber::exact(2.0);
    /// assert!(two.is_exact());
    /// ```
    #[must_use]
    pub fn exact(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Creates the approximate number covering exactly `[min, max]`.
    ///
    /// # Errors
    ///
    /// Returns [`ApproxError::InvalidRange`] when `max < min`. NaN bounds never
    /// compare as inverted, so they produce a NaN-valued number instead.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let reading = ApproximateNumber::from_min_max(1.0, 10.0).unwrap();
    /// assert_eq!(reading.value(), 5.5);
    /// assert_eq!(reading.delta(), 4.5);
    ///
    /// assert!(ApproximateNumber::from_min_max(10.0, 1.0).is_err());
    /// ```
    pub fn from_min_max(min: f64, max: f64) -> Result<Self> {
        if max < min {
            tracing::debug!(min, max, "rejected inverted interval");
            return Err(ApproxError::invalid_range(min, max));
        }
        let value = (min + max) / 2.0;
        let delta = ((max - min) / 2.0).abs();
        Ok(Self::new(value, delta))
    }

    /// Creates a number from a value and a relative tolerance.
    ///
    /// A 1 % resistor rated at 220 Ω is `from_relative(220.0, 0.01)`.
    #[must_use]
    pub fn from_relative(value: f64, relative: f64) -> Self {
        Self::new(value, value * relative)
    }

    /// The value at the centre of the interval.
    #[inline]
    #[must_use]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The half-width of the interval. Never negative.
    #[inline]
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// The lowest value the quantity may take.
    #[inline]
    #[must_use]
    pub fn min(&self) -> f64 {
        self.value - self.delta
    }

    /// The highest value the quantity may take.
    #[inline]
    #[must_use]
    pub fn max(&self) -> f64 {
        self.value + self.delta
    }

    /// The relative error `|delta / value|`.
    ///
    /// A zero value with a nonzero delta gives `f64::INFINITY`. The exact zero
    /// `0±0` gives NaN, since its relative error is `0 / 0`.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// assert_eq!(ApproximateNumber::new(4.0, 1.0).relative_delta(), 0.25);
    /// assert!(ApproximateNumber::new(0.0, 1.0).relative_delta().is_infinite());
    /// assert!(ApproximateNumber::default().relative_delta().is_nan());
    /// ```
    #[must_use]
    pub fn relative_delta(&self) -> f64 {
        (self.delta / self.value).abs()
    }

    /// Whether the number carries no uncertainty at all.
    #[must_use]
    pub fn is_exact(&self) -> bool {
        self.delta == 0.0
    }
}

impl From<f64> for ApproximateNumber {
    fn from(value: f64) -> Self {
        Self::exact(value)
    }
}

/// Renders `value±delta` with `f64`'s own formatting.
///
/// A precision given to the formatter applies to both parts, so
/// `format!("{:.1}", n)` renders `4.2±0.3`. Use [`value`](ApproximateNumber::value)
/// and [`delta`](ApproximateNumber::delta) for anything more specific.
impl fmt::Display for ApproximateNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(precision) => write!(
                f,
                "{:.*}{}{:.*}",
                precision, self.value, SEPARATOR, precision, self.delta
            ),
            None => write!(f, "{}{SEPARATOR}{}", self.value, self.delta),
        }
    }
}

// Deserialized input goes through `new` so the delta invariant holds.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct Parts {
    value: f64,
    delta: f64,
}

#[cfg(feature = "serde")]
impl From<Parts> for ApproximateNumber {
    fn from(parts: Parts) -> Self {
        Self::new(parts.value, parts.delta)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_exact_zero() {
        let zero = ApproximateNumber::default();
        assert_eq!(zero, ApproximateNumber::new(0.0, 0.0));
        assert!(zero.is_exact());
        assert_eq!(zero.min(), 0.0);
        assert_eq!(zero.max(), 0.0);
    }

    #[test]
    fn test_negative_delta_is_normalized() {
        let n = ApproximateNumber::new(10.0, -1.0);
        assert_eq!(n.delta(), 1.0);
        assert_eq!(n, ApproximateNumber::new(10.0, 1.0));
    }

    #[test]
    fn test_interval_bounds() {
        let n = ApproximateNumber::new(5.0, 2.0);
        assert_eq!(n.min(), 3.0);
        assert_eq!(n.max(), 7.0);
    }

    #[test]
    fn test_from_min_max() {
        let cases = [
            (0.0, 0.0, ApproximateNumber::new(0.0, 0.0)),
            (0.0, 10.0, ApproximateNumber::new(5.0, 5.0)),
            (1.0, 10.0, ApproximateNumber::new(5.5, 4.5)),
        ];
        for (min, max, expected) in cases {
            let actual = ApproximateNumber::from_min_max(min, max).unwrap();
            assert_eq!(actual, expected, "min={min}, max={max}");
        }
    }

    #[test]
    fn test_from_min_max_inverted() {
        let err = ApproximateNumber::from_min_max(2.0, 1.0).unwrap_err();
        assert_eq!(err, ApproxError::InvalidRange { min: 2.0, max: 1.0 });
    }

    #[test]
    fn test_from_min_max_degenerate_interval() {
        let n = ApproximateNumber::from_min_max(3.0, 3.0).unwrap();
        assert_eq!(n, ApproximateNumber::exact(3.0));
    }

    #[test]
    fn test_from_min_max_nan_is_not_an_error() {
        let n = ApproximateNumber::from_min_max(f64::NAN, 1.0).unwrap();
        assert!(n.value().is_nan());
    }

    #[test]
    fn test_from_relative() {
        let r = ApproximateNumber::from_relative(200.0, 0.05);
        assert_eq!(r.value(), 200.0);
        assert!((r.delta() - 10.0).abs() < 1e-12);

        let negative = ApproximateNumber::from_relative(-200.0, 0.05);
        assert!(negative.delta() > 0.0);
    }

    #[test]
    fn test_relative_delta() {
        assert_eq!(ApproximateNumber::new(1.0, 1.0).relative_delta(), 1.0);
        assert_eq!(ApproximateNumber::new(-4.0, 1.0).relative_delta(), 0.25);
        assert_eq!(
            ApproximateNumber::new(0.0, 1.0).relative_delta(),
            f64::INFINITY
        );
        assert!(ApproximateNumber::new(0.0, 0.0).relative_delta().is_nan());
    }

    #[test]
    fn test_from_f64() {
        let n: ApproximateNumber = 3.5.into();
        assert_eq!(n.value(), 3.5);
        assert!(n.is_exact());
    }

    #[test]
    fn test_display() {
        assert_eq!(ApproximateNumber::new(4.2, 0.3).to_string(), "4.2±0.3");
        assert_eq!(ApproximateNumber::new(100.0, 2.0).to_string(), "100±2");
        assert_eq!(ApproximateNumber::default().to_string(), "0±0");
    }

    #[test]
    fn test_display_with_precision() {
        let n = ApproximateNumber::new(2.718_281_828, 0.271_828);
        assert_eq!(format!("{n:.2}"), "2.72±0.27");
    }

    #[test]
    fn test_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ApproximateNumber>();
    }
}
