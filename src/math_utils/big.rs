use num_bigint::BigUint;
use num_traits::One;
use tracing::trace;

use super::NEGATIVE_FACTORIAL;
use crate::error::Result;

/// Computes the exact value of `n!`.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`](crate::Error::InvalidArgument) when `n` is negative.
///
/// # Examples
///
/// ```rust
/// use arithkit::math_utils::factorial_big;
/// use num_bigint::BigUint;
///
/// let expected: BigUint = "15511210043330985984000000".parse().unwrap();
/// assert_eq!(factorial_big(25), Ok(expected));
/// ```
pub fn factorial_big(n: i32) -> Result<BigUint> {
    let n = u32::try_from(n).map_err(|_| NEGATIVE_FACTORIAL)?;

    let result = (1..=n).fold(BigUint::one(), |acc, i| acc * i);
    trace!(n, bits = result.bits(), "big factorial computed");
    Ok(result)
}
