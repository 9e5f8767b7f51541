//! Core model errors
//!
//! The projection is a pure pipeline: any invalid input invalidates the whole
//! run, so errors propagate straight to the caller with no local recovery.

use thiserror::Error;

/// Errors produced by the projection core
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// An input is outside its documented valid range
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A derived quantity has a zero denominator
    #[error("division by zero: {0}")]
    DivisionByZero(&'static str),
}

impl ModelError {
    /// Shorthand for building an InvalidArgument error from a format-ready message
    pub fn invalid(msg: impl Into<String>) -> Self {
        ModelError::InvalidArgument(msg.into())
    }
}
