use crate::ApproximateNumber;

/// Conservative ordering of approximate numbers.
///
/// Every predicate answers "is this *definitely* so?" by looking only at the
/// intervals `[min, max]` of the two operands. When the intervals share a
/// point nothing can be claimed, so two overlapping numbers may fail every
/// predicate at once. That is the point: [`overlaps`](Comparison::overlaps)
/// reports exactly that situation.
///
/// The right-hand side is either another [`ApproximateNumber`] or a plain
/// `f64`, which is treated as an exact point.
pub trait Comparison<Rhs = Self> {
    /// True when `self` lies entirely below `other`: `self.max() < other.min()`.
    #[must_use]
    fn less_than(&self, other: Rhs) -> bool;

    /// True when `self.max() <= other.min()`.
    #[must_use]
    fn less_or_equal(&self, other: Rhs) -> bool;

    /// True when `other` is [`less_or_equal`](Comparison::less_or_equal) to `self`.
    ///
    /// Note the mirrored pairing: this is the dual of the non-strict
    /// predicate, so touching intervals count as "greater than".
    #[must_use]
    fn greater_than(&self, other: Rhs) -> bool;

    /// True when `other` is [`less_than`](Comparison::less_than) `self`.
    ///
    /// This is the dual of the strict predicate, so touching intervals do not
    /// count.
    #[must_use]
    fn greater_or_equal(&self, other: Rhs) -> bool;

    /// True when neither operand is definitely at or below the other. Intervals
    /// that merely touch at one end do not overlap.
    #[must_use]
    fn overlaps(&self, other: Rhs) -> bool;
}

impl Comparison for ApproximateNumber {
    /// Strict interval ordering
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::{ApproximateNumber, Comparison};
    ///
    /// let cold = ApproximateNumber::new(0.0, 1.0);
    /// let warm = ApproximateNumber::new(3.0, 1.0);
    /// assert!(cold.less_than(warm));
    ///
    /// // 0±1 and 1.5±1 share [0.5, 1]
    /// assert!(!cold.less_than(ApproximateNumber::new(1.5, 1.0)));
    /// ```
    fn less_than(&self, other: Self) -> bool {
        self.max() < other.min()
    }

    fn less_or_equal(&self, other: Self) -> bool {
        self.max() <= other.min()
    }

    fn greater_than(&self, other: Self) -> bool {
        other.less_or_equal(*self)
    }

    fn greater_or_equal(&self, other: Self) -> bool {
        other.less_than(*self)
    }

    /// Interval overlap
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::{ApproximateNumber, Comparison};
    ///
    /// let a = ApproximateNumber::new(1.0, 1.0);
    /// let b = ApproximateNumber::new(2.0, 1.0);
    /// assert!(a.overlaps(b));
    /// assert!(!a.less_than(b) && !a.greater_than(b));
    /// ```
    fn overlaps(&self, other: Self) -> bool {
        !self.less_or_equal(other) && !other.less_or_equal(*self)
    }
}

impl Comparison<f64> for ApproximateNumber {
    /// # Example
    /// ```rust
    /// use approximate_rs::{ApproximateNumber, Comparison};
    ///
    /// let reading = ApproximateNumber::new(55.0, 5.0);
    /// assert!(reading.less_than(60.5));
    /// assert!(!reading.less_than(59.0));
    /// ```
    fn less_than(&self, threshold: f64) -> bool {
        self.less_than(ApproximateNumber::exact(threshold))
    }

    fn less_or_equal(&self, threshold: f64) -> bool {
        self.less_or_equal(ApproximateNumber::exact(threshold))
    }

    fn greater_than(&self, threshold: f64) -> bool {
        self.greater_than(ApproximateNumber::exact(threshold))
    }

    fn greater_or_equal(&self, threshold: f64) -> bool {
        self.greater_or_equal(ApproximateNumber::exact(threshold))
    }

    fn overlaps(&self, threshold: f64) -> bool {
        self.overlaps(ApproximateNumber::exact(threshold))
    }
}

/// Whether `f` and `t` may describe the same quantity.
///
/// Equivalent to `f.overlaps(t)`.
#[must_use]
pub fn overlap(f: ApproximateNumber, t: ApproximateNumber) -> bool {
    f.overlaps(t)
}

impl ApproximateNumber {
    /// Whether `x` lies inside the closed interval `[min, max]`.
    ///
    /// # Example
    /// ```rust
    /// use approximate_rs::ApproximateNumber;
    ///
    /// let width = ApproximateNumber::new(50.0, 0.5);
    /// assert!(width.contains(50.5));
    /// assert!(!width.contains(51.0));
    /// ```
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.min() <= x && x <= self.max()
    }
}
