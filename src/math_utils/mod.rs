//! # Math Utilities
//!
//! Standalone integer helpers: a trial-division primality test and factorials.
//!
//! ## Overview
//!
//! - [`is_prime`]: deterministic trial division up to `floor(sqrt(n))`
//! - [`factorial`]: iterative product on `i64`, wrapping past `20!`
//! - [`checked_factorial`]: the same product, reporting overflow as an error
//! - `factorial_big`: exact factorial on `BigUint` (requires the `bigint` feature)
//!
//! ## Overflow
//!
//! `20!` is the largest factorial that fits an `i64`. [`factorial`] keeps machine
//! semantics and wraps around from `21!` onwards, so its result is only meaningful
//! for `n <= 20`. Use [`checked_factorial`] to detect the overflow, or
//! `factorial_big` to get the exact value.
//!
//! ## Examples
//!
//! ```rust
//! use arithkit::math_utils::{checked_factorial, factorial, is_prime};
//!
//! assert!(is_prime(13));
//! assert!(!is_prime(1));
//!
//! assert_eq!(factorial(5), Ok(120));
//! assert!(factorial(-1).is_err());
//! assert!(checked_factorial(21).is_err());
//! ```

use tracing::trace;

use crate::error::{Error, Result};

#[cfg(feature = "bigint")]
pub mod big;

#[cfg(feature = "bigint")]
pub use big::factorial_big;

/// Returns `true` if `n` is prime.
///
/// Every `n <= 1` is reported as not prime.
pub fn is_prime(n: i32) -> bool {
    if n <= 1 {
        return false;
    }

    // Squared in i64: for n close to i32::MAX the divisor's square leaves the i32 range.
    let n = i64::from(n);
    let mut divisor: i64 = 2;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Computes `n!` as an `i64`, wrapping on overflow.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `n` is negative.
pub fn factorial(n: i32) -> Result<i64> {
    if n < 0 {
        return Err(NEGATIVE_FACTORIAL);
    }

    let result = (1..=i64::from(n)).fold(1_i64, |acc, i| acc.wrapping_mul(i));
    trace!(n, result, "factorial computed");
    Ok(result)
}

/// Computes `n!` as an `i64`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] when `n` is negative and [`Error::Runtime`]
/// when the product does not fit an `i64`.
pub fn checked_factorial(n: i32) -> Result<i64> {
    if n < 0 {
        return Err(NEGATIVE_FACTORIAL);
    }

    let mut result: i64 = 1;
    for i in 1..=i64::from(n) {
        result = result.checked_mul(i).ok_or_else(|| {
            trace!(n, at = i, "factorial overflow");
            Error::Runtime("factorial overflows a 64-bit integer")
        })?;
    }
    Ok(result)
}

const NEGATIVE_FACTORIAL: Error =
    Error::InvalidArgument("factorial is not defined for negative numbers");
