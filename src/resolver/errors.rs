//! Resolver error types.

use thiserror::Error;

/// Resolver errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ResolverError {
    /// The outcome source could not produce a decision
    #[error("Resolver unavailable: {0}")]
    Unavailable(String),
}

/// Result type for resolver operations
pub type ResolverResult<T> = Result<T, ResolverError>;
