use tracing::trace;

use crate::calculator::Calculator;
use crate::error::{Error, Result};

/// A calculator for powers and averages, built on top of a basic [`Calculator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdvancedCalculator {
    basic: Calculator,
}

impl AdvancedCalculator {
    pub fn new() -> Self {
        Self {
            basic: Calculator::new(),
        }
    }

    /// Raises `base` to the integer power `exp` by repeated multiplication.
    ///
    /// `power(b, 0)` is `1.0` for every `b`, zero included.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Runtime`] when a negative exponent is applied to a base
    /// whose positive power is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use arithkit::AdvancedCalculator;
    ///
    /// let calc = AdvancedCalculator::new();
    /// assert_eq!(calc.power(2.0, 3), Ok(8.0));
    /// assert_eq!(calc.power(2.0, -3), Ok(0.125));
    /// assert!(calc.power(0.0, -1).is_err());
    /// ```
    pub fn power(&self, base: f64, exp: i32) -> Result<f64> {
        if exp == 0 {
            return Ok(1.0);
        }

        let steps = exp.unsigned_abs();
        let mut result = 1.0;
        for _ in 0..steps {
            result *= base;
        }
        trace!(base, exp, steps, result, "power accumulated");

        if exp < 0 {
            if result == 0.0 {
                return Err(Error::Runtime("division by zero in power calculation"));
            }
            return Ok(1.0 / result);
        }
        Ok(result)
    }

    /// Arithmetic mean of `values`, or `0.0` when there are none.
    pub fn average(&self, values: &[f64]) -> Result<f64> {
        if values.is_empty() {
            return Ok(0.0);
        }

        let total = self.basic.sum(values);
        trace!(total, len = values.len(), "averaging");
        self.basic.divide(total, values.len() as f64)
    }
}
