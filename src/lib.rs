//! # Arithkit
//!
//! A small arithmetic library: a basic calculator, an advanced calculator built on
//! top of it, and standalone integer utilities.
//!
//! ## Overview
//!
//! Arithkit provides:
//! - **Calculator**: wrapping integer `add`/`subtract`/`multiply`, checked `divide`
//!   and `div_rem`, `sign`, and a generic `sum` over any numeric slice
//! - **AdvancedCalculator**: integer powers by repeated multiplication and averages,
//!   composed from a [`Calculator`] it owns
//! - **Math utilities**: trial-division primality and factorials (wrapping, checked,
//!   and exact with the `bigint` feature)
//!
//! Every operation is a pure function of its arguments. Both calculators are
//! zero-cost `Copy` values with no shared state, so they can be used freely from
//! any number of threads.
//!
//! ## Errors
//!
//! Fallible operations return [`Result`], with two kinds of [`Error`]:
//! - [`Error::InvalidArgument`]: an input outside the operation's domain, such as a
//!   zero divisor or a negative factorial
//! - [`Error::Runtime`]: a failure of the computation itself, such as raising zero
//!   to a negative power
//!
//! ## Quick Start
//!
//! ```rust
//! use arithkit::prelude::*;
//!
//! let calc = Calculator::new();
//! assert_eq!(calc.add(2, 3), 5);
//! assert_eq!(calc.divide(10.0, 4.0), Ok(2.5));
//! assert_eq!(calc.sum::<i32>(&[]), 0);
//!
//! let adv = AdvancedCalculator::new();
//! assert_eq!(adv.power(2.0, -3), Ok(0.125));
//! assert_eq!(adv.average(&[1.0, 2.0, 3.0, 4.0]), Ok(2.5));
//!
//! assert!(is_prime(13));
//! assert_eq!(factorial(5), Ok(120));
//! ```
//!
//! ## Features
//!
//! - `bigint` (default): exact factorials through `math_utils::factorial_big`,
//!   backed by `num-bigint`

pub mod calculator;
pub mod error;
pub mod math_utils;

// Re-export the main types for convenience
pub use calculator::{AdvancedCalculator, Calculator};
pub use error::{Error, Result};

pub mod prelude {
    //! Prelude module for Arithkit.
    //!
    //! Re-exports the calculators, the error type and the math utilities so a single
    //! glob import covers the whole API.

    pub use crate::calculator::{AdvancedCalculator, Calculator};
    pub use crate::error::{Error, Result};
    pub use crate::math_utils::*;
}

#[cfg(test)]
mod tests {
    use std::sync::OnceLock;

    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rstest::fixture;

    use crate::{AdvancedCalculator, Calculator};

    const EPSILON: f64 = 1e-8;
    static SEED: OnceLock<u64> = OnceLock::new();

    #[fixture]
    pub const fn n_experiments() -> usize {
        10_000
    }

    #[fixture]
    pub fn seed() -> u64 {
        *SEED.get_or_init(|| rand::rng().random())
    }

    #[fixture]
    pub fn rng(n_experiments: usize, seed: u64) -> impl Rng {
        println!("{} experiments with seed {}", n_experiments, seed);
        StdRng::seed_from_u64(seed)
    }

    #[track_caller]
    pub fn assert_almost_eq(a: f64, b: f64, message: &str) {
        let diff = (a - b).abs() / a.abs().max(b.abs()).max(1e-10);
        assert!(
            diff <= EPSILON,
            "{message}: {a:.5e} vs {b:.5e} ({diff:.2e} > {EPSILON:.2e})",
        );
    }

    fn assert_thread_safe<T: Send + Sync + Copy + 'static>() {}

    #[test]
    fn test_calculators_are_thread_safe() {
        assert_thread_safe::<Calculator>();
        assert_thread_safe::<AdvancedCalculator>();
    }

    #[test]
    fn test_shared_across_threads() {
        let adv = AdvancedCalculator::new();
        let handles: Vec<_> = (1..=4)
            .map(|exp| std::thread::spawn(move || adv.power(2.0, exp)))
            .collect();
        let results: Vec<_> = handles
            .into_iter()
            .map(|handle| handle.join().unwrap().unwrap())
            .collect();
        assert_eq!(results, vec![2.0, 4.0, 8.0, 16.0]);
    }
}
