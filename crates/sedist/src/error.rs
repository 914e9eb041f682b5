//! Error types for sedist
//!
//! Construction is the only fallible phase: a fit either succeeds and
//! returns a fully usable distribution, or fails here. All query
//! methods on a constructed distribution are total over the real line.

use thiserror::Error;

/// Errors raised while constructing a distribution.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SedistError {
    /// Too few finite observations to define an empirical CDF
    #[error("sample must contain at least 2 finite observations, got {len}")]
    InvalidInput { len: usize },

    /// A distribution parameter is outside its valid range
    #[error("invalid parameter {name} = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },
}

/// Convenience result alias for sedist operations.
pub type Result<T> = std::result::Result<T, SedistError>;
