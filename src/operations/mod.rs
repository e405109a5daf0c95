pub mod arithmetic;
pub mod comparison;

pub use arithmetic::{add, div, mul, sub};
pub use comparison::{Comparison, overlap};
