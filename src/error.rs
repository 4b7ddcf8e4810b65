use thiserror::Error;

/// Errors returned by the fallible calculator and math operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// An input lies outside the operation's domain (zero divisor, negative factorial).
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// The computation itself failed for otherwise valid inputs.
    #[error("runtime error: {0}")]
    Runtime(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
