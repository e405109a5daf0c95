//! # approximate-rs
//!
//! Numbers that carry their measurement error with them.
//!
//! An [`ApproximateNumber`] is a central value plus or minus a nonnegative
//! delta, which is what any real-world measurement actually gives you. Measure
//! a kitchen table with a tape measure divided in centimetres and you get
//! something like `50±0.5` cm for the width and `100±0.5` cm for the length.
//! This crate lets you keep computing with those numbers and get back a bound
//! on the error of the result:
//!
//! ```rust
//! use approximate_rs::ApproximateNumber;
//!
//! let width: ApproximateNumber = "50±0.5".parse().unwrap();
//! let length: ApproximateNumber = "100±0.5".parse().unwrap();
//!
//! let perimeter = (width + length) * 2.0;
//! assert_eq!(perimeter, ApproximateNumber::new(300.0, 2.0));
//!
//! // The values subtract, the errors still add up
//! assert_eq!(length - width, ApproximateNumber::new(50.0, 1.0));
//! ```
//!
//! ## Worst-case propagation
//!
//! Errors are combined as if they conspire against you: absolute deltas add
//! under `+` and `-`, relative deltas add under `*` and `/`, and functions are
//! linearised around the centre (see [`functions`]). This is interval
//! reasoning, not statistics; there is no root-sum-square combination.
//!
//! ## Comparisons
//!
//! Ordering is only claimed when the intervals say so. Two readings whose
//! intervals overlap are neither less nor greater than each other; see
//! [`Comparison`].

pub mod approximate;
pub mod error;
pub mod functions;
pub mod notation;
pub mod operations;

pub use approximate::ApproximateNumber;
pub use error::{ApproxError, ParseError};
pub use functions::{Function, apply};
pub use operations::{Comparison, add, div, mul, overlap, sub};
