//! # Calculator
//!
//! Basic integer and floating-point arithmetic.
//!
//! Integer operations follow machine semantics: overflow wraps around instead of
//! panicking. The only fallible operations are the divisions, which reject a zero
//! divisor with [`Error::InvalidArgument`].
//!
//! ```rust
//! use arithkit::Calculator;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), 5);
//! assert_eq!(calc.sign(-7), -1);
//! assert_eq!(calc.sum(&[1.5, 2.5, 3.0]), 7.0);
//! assert!(calc.divide(1.0, 0.0).is_err());
//! ```

use std::cmp::Ordering;

use num_traits::Zero;

use crate::error::{Error, Result};

pub mod advanced;

pub use advanced::AdvancedCalculator;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    /// Divides `a` by `b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(Error::InvalidArgument("division by zero is not allowed"));
        }
        Ok(a / b)
    }

    /// Integer quotient (truncated toward zero) and remainder of `a / b`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `b` is zero.
    pub fn div_rem(&self, a: i32, b: i32) -> Result<(i32, i32)> {
        if b == 0 {
            return Err(Error::InvalidArgument("division by zero is not allowed"));
        }
        Ok((a.wrapping_div(b), a.wrapping_rem(b)))
    }

    /// Returns `1`, `-1` or `0` following the sign of `x`.
    pub fn sign(&self, x: i32) -> i32 {
        match x.cmp(&0) {
            Ordering::Greater => 1,
            Ordering::Less => -1,
            Ordering::Equal => 0,
        }
    }

    /// Sums `values` left to right, starting from `T::zero()`.
    pub fn sum<T>(&self, values: &[T]) -> T
    where
        T: Zero + Clone,
    {
        values
            .iter()
            .fold(T::zero(), |acc, value| acc + value.clone())
    }
}
