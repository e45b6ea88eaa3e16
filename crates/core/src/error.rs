//! Validation error model.

use thiserror::Error;

/// Result type used across the identifier library.
pub type IdResult<T> = Result<T, IdError>;

/// Validation failure raised when constructing an identifier from text.
///
/// Construction either fully succeeds, yielding an immutable valid value, or
/// fails with one of these before any value exists. The library never catches
/// or suppresses them; callers decide whether to recover or propagate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The input is not the exact canonical decimal rendering of an integer
    /// (leading zeros, a leading `+`, decimals and trailing text all fail).
    #[error("\"{0}\" is not a valid integer value")]
    NotAnInteger(String),

    /// The input does not match the canonical hyphenated UUIDv4 form.
    #[error("\"{0}\" is not a valid UUID")]
    InvalidUuid(String),
}
