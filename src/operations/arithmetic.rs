//! Worst-case error propagation for the four arithmetic operators.
//!
//! Sums and differences add absolute deltas. Products and quotients add
//! relative deltas, which is a first-order approximation of the worst case
//! rather than an exact interval product.

use crate::ApproximateNumber;
use std::iter::Sum;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// Adds two approximate numbers.
///
/// The deltas add: in the worst case both errors point the same way.
///
/// # Example
/// ```rust
/// use approximate_rs::{ApproximateNumber, add};
///
/// let sum = add(ApproximateNumber::new(1.0, 2.0), ApproximateNumber::new(3.0, 4.0));
/// assert_eq!(sum, ApproximateNumber::new(4.0, 6.0));
/// ```
#[must_use]
pub fn add(a: ApproximateNumber, b: ApproximateNumber) -> ApproximateNumber {
    ApproximateNumber::new(a.value() + b.value(), a.delta() + b.delta())
}

/// Subtracts `b` from `a`.
///
/// The values subtract but the deltas still add.
///
/// # Example
/// ```rust
/// use approximate_rs::{ApproximateNumber, sub};
///
/// let length = ApproximateNumber::new(100.0, 0.5);
/// let width = ApproximateNumber::new(50.0, 0.5);
/// assert_eq!(sub(length, width), ApproximateNumber::new(50.0, 1.0));
/// ```
#[must_use]
pub fn sub(a: ApproximateNumber, b: ApproximateNumber) -> ApproximateNumber {
    ApproximateNumber::new(a.value() - b.value(), a.delta() + b.delta())
}

/// Multiplies two approximate numbers.
///
/// The relative deltas of the operands add up to the relative delta of the
/// product. An operand with a zero value has an infinite (or, for `0±0`,
/// NaN) relative delta, and the product's delta follows IEEE-754 from there.
///
/// # Example
/// ```rust
/// use approximate_rs::{ApproximateNumber, mul};
///
/// let area = mul(ApproximateNumber::new(10.0, 1.0), ApproximateNumber::new(20.0, 1.0));
/// assert_eq!(area.value(), 200.0);
/// assert!((area.delta() - 30.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn mul(a: ApproximateNumber, b: ApproximateNumber) -> ApproximateNumber {
    let relative = a.relative_delta() + b.relative_delta();
    let value = a.value() * b.value();
    ApproximateNumber::new(value, value * relative)
}

/// Divides `a` by `b`.
///
/// Uses the same relative delta sum as [`mul`]. Dividing by a zero-valued
/// number yields infinities rather than an error.
///
/// # Example
/// ```rust
/// use approximate_rs::{ApproximateNumber, div};
///
/// let speed = div(ApproximateNumber::new(100.0, 1.0), ApproximateNumber::new(10.0, 0.1));
/// assert_eq!(speed.value(), 10.0);
/// assert!((speed.delta() - 0.2).abs() < 1e-12);
///
/// let blown = div(ApproximateNumber::new(1.0, 0.1), ApproximateNumber::new(0.0, 0.1));
/// assert!(blown.delta().is_infinite());
/// ```
#[must_use]
pub fn div(a: ApproximateNumber, b: ApproximateNumber) -> ApproximateNumber {
    let relative = a.relative_delta() + b.relative_delta();
    let value = a.value() / b.value();
    ApproximateNumber::new(value, value * relative)
}

impl ApproximateNumber {
    /// Multiplies by an exact scalar.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let half_perimeter = ApproximateNumber::new(150.0, 1.0);
    /// assert_eq!(half_perimeter.scale(2.0), ApproximateNumber::new(300.0, 2.0));
    /// assert_eq!(half_perimeter.scale(-2.0).delta(), 2.0);
    /// ```
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self::new(factor * self.value(), factor * self.delta())
    }
}

// Operator forms of the free functions
impl Add for ApproximateNumber {
    type Output = ApproximateNumber;

    fn add(self, rhs: Self) -> Self::Output {
        add(self, rhs)
    }
}

impl Add<f64> for ApproximateNumber {
    type Output = ApproximateNumber;

    fn add(self, rhs: f64) -> Self::Output {
        self + ApproximateNumber::exact(rhs)
    }
}

impl Add<ApproximateNumber> for f64 {
    type Output = ApproximateNumber;

    fn add(self, rhs: ApproximateNumber) -> Self::Output {
        ApproximateNumber::exact(self) + rhs
    }
}

impl Sub for ApproximateNumber {
    type Output = ApproximateNumber;

    fn sub(self, rhs: Self) -> Self::Output {
        sub(self, rhs)
    }
}

impl Sub<f64> for ApproximateNumber {
    type Output = ApproximateNumber;

    fn sub(self, rhs: f64) -> Self::Output {
        self - ApproximateNumber::exact(rhs)
    }
}

impl Sub<ApproximateNumber> for f64 {
    type Output = ApproximateNumber;

    fn sub(self, rhs: ApproximateNumber) -> Self::Output {
        ApproximateNumber::exact(self) - rhs
    }
}

impl Mul for ApproximateNumber {
    type Output = ApproximateNumber;

    fn mul(self, rhs: Self) -> Self::Output {
        mul(self, rhs)
    }
}

// A scalar is exact, so it goes through `scale` rather than the relative
// delta sum (which would turn `0 * x` into NaN).
impl Mul<f64> for ApproximateNumber {
    type Output = ApproximateNumber;

    fn mul(self, rhs: f64) -> Self::Output {
        self.scale(rhs)
    }
}

impl Mul<ApproximateNumber> for f64 {
    type Output = ApproximateNumber;

    fn mul(self, rhs: ApproximateNumber) -> Self::Output {
        rhs.scale(self)
    }
}

impl Div for ApproximateNumber {
    type Output = ApproximateNumber;

    fn div(self, rhs: Self) -> Self::Output {
        div(self, rhs)
    }
}

impl Div<f64> for ApproximateNumber {
    type Output = ApproximateNumber;

    fn div(self, rhs: f64) -> Self::Output {
        ApproximateNumber::new(self.value() / rhs, self.delta() / rhs)
    }
}

impl Neg for ApproximateNumber {
    type Output = ApproximateNumber;

    fn neg(self) -> Self::Output {
        ApproximateNumber::new(-self.value(), self.delta())
    }
}

impl Sum for ApproximateNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(ApproximateNumber::default(), add)
    }
}

impl<'a> Sum<&'a ApproximateNumber> for ApproximateNumber {
    fn sum<I: Iterator<Item = &'a ApproximateNumber>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
