//! Propagating uncertainty through scalar functions.
//!
//! A function `f` applied to `x ± dx` is linearised around the centre with a
//! first-order Taylor expansion:
//!
//! ```text
//! f(x + dx) ≈ f(x) + f'(x) · dx
//! ```
//!
//! so the result is `f(x) ± |f'(x) · dx|`. The well-known functions listed in
//! [`Function`] use their closed-form derivative. Any other function gets a
//! central finite difference over a caller-chosen `epsilon`.
//!
//! # Choosing epsilon
//!
//! The crate never picks `epsilon` for you. Too small a value makes
//! `f(x + ε) - f(x - ε)` lose most of its significant digits to cancellation;
//! too large a value measures a secant instead of the tangent. Something near
//! `1e-3` relative to the scale of `x` is a reasonable start for smooth
//! functions.

use crate::ApproximateNumber;
use std::fmt;

/// A function to propagate an approximate number through.
///
/// The named variants are evaluated with their analytic derivative and ignore
/// `epsilon`. [`Function::Generic`] wraps any other `f64 -> f64` function and
/// is differentiated numerically.
#[derive(Clone, Copy)]
pub enum Function<'a> {
    /// Natural logarithm
    Ln,
    /// `e^x`
    Exp,
    /// Square root
    Sqrt,
    /// Sine (radians)
    Sin,
    /// Cosine (radians)
    Cos,
    /// Any other scalar function
    Generic(&'a dyn Fn(f64) -> f64),
}

impl Function<'_> {
    /// Evaluates the function at `x`.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Function::Ln => x.ln(),
            Function::Exp => x.exp(),
            Function::Sqrt => x.sqrt(),
            Function::Sin => x.sin(),
            Function::Cos => x.cos(),
            Function::Generic(f) => f(x),
        }
    }

    /// The derivative at `x`.
    ///
    /// Exact for the named variants; a central difference
    /// `(f(x + ε) - f(x - ε)) / 2ε` for [`Function::Generic`].
    #[must_use]
    pub fn derivative(&self, x: f64, epsilon: f64) -> f64 {
        match self {
            Function::Ln => x.recip(),
            Function::Exp => x.exp(),
            Function::Sqrt => 0.5 / x.sqrt(),
            Function::Sin => x.cos(),
            Function::Cos => -x.sin(),
            Function::Generic(f) => (f(x + epsilon) - f(x - epsilon)) / (2.0 * epsilon),
        }
    }

    /// Whether the derivative is known in closed form.
    #[must_use]
    pub fn is_analytic(&self) -> bool {
        !matches!(self, Function::Generic(_))
    }
}

impl fmt::Debug for Function<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Function::Ln => write!(f, "Ln"),
            Function::Exp => write!(f, "Exp"),
            Function::Sqrt => write!(f, "Sqrt"),
            Function::Sin => write!(f, "Sin"),
            Function::Cos => write!(f, "Cos"),
            Function::Generic(_) => write!(f, "Generic(..)"),
        }
    }
}

/// Applies `function` to `x`, propagating its delta.
///
/// The value is `function(x.value())`, evaluated at the unperturbed centre.
/// The delta is `|f'(x.value()) · x.delta()|`, with two exceptions kept from
/// the closed-form expansions: for [`Function::Ln`] the delta is
/// `x.delta() / x.value()` and for [`Function::Exp`] it is
/// `e^x.value() · x.delta()`. Either way the stored delta is nonnegative.
///
/// # Example
/// ```rust
/// use approximate_rs::{ApproximateNumber, Function, apply};
///
/// let x = ApproximateNumber::new(1.0, 0.1);
/// let log = apply(Function::Ln, x, 1e-3);
/// assert_eq!(log, ApproximateNumber::new(0.0, 0.1));
///
/// let square = |v: f64| v * v;
/// let area = apply(Function::Generic(&square), ApproximateNumber::new(10.0, 0.1), 1e-3);
/// assert_eq!(area.value(), 100.0);
/// assert!((area.delta() - 2.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn apply(function: Function<'_>, x: ApproximateNumber, epsilon: f64) -> ApproximateNumber {
    let centre = x.value();
    let value = function.evaluate(centre);
    let delta = match function {
        Function::Ln => x.delta() / centre,
        Function::Exp => value * x.delta(),
        // exact input stays exact even where f' is unbounded, e.g. sqrt at 0
        Function::Sqrt | Function::Sin | Function::Cos if x.is_exact() => 0.0,
        _ => (function.derivative(centre, epsilon) * x.delta()).abs(),
    };
    tracing::trace!(?function, centre, epsilon, value, delta, "applied function");
    ApproximateNumber::new(value, delta)
}

impl ApproximateNumber {
    /// Applies an arbitrary function, differentiating it numerically.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let side = ApproximateNumber::new(2.0, 0.01);
    /// let volume = side.apply(|s| s.powi(3), 1e-4);
    /// assert!((volume.value() - 8.0).abs() < 1e-12);
    /// assert!((volume.delta() - 0.12).abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn apply<F>(&self, f: F, epsilon: f64) -> Self
    where
        F: Fn(f64) -> f64,
    {
        apply(Function::Generic(&f), *self, epsilon)
    }

    /// Applies a tagged [`Function`].
    #[must_use]
    pub fn apply_function(&self, function: Function<'_>, epsilon: f64) -> Self {
        apply(function, *self, epsilon)
    }

    /// Natural logarithm.
    ///
    /// The delta is `delta / value`. A zero value gives `-inf±inf`, and a
    /// negative value gives a NaN value with a finite delta.
    #[must_use]
    pub fn ln(&self) -> Self {
        self.apply_function(Function::Ln, 0.0)
    }

    /// `e` raised to this number.
    #[must_use]
    pub fn exp(&self) -> Self {
        self.apply_function(Function::Exp, 0.0)
    }

    /// Square root.
    ///
    /// An exact zero stays `0±0`; any other zero-valued number gets an
    /// infinite delta from the unbounded derivative.
    #[must_use]
    pub fn sqrt(&self) -> Self {
        self.apply_function(Function::Sqrt, 0.0)
    }

    /// Sine, in radians.
    #[must_use]
    pub fn sin(&self) -> Self {
        self.apply_function(Function::Sin, 0.0)
    }

    /// Cosine, in radians.
    #[must_use]
    pub fn cos(&self) -> Self {
        self.apply_function(Function::Cos, 0.0)
    }
}
