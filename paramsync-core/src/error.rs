//! Error types for paramsync-core.

use thiserror::Error;

use crate::types::ParameterName;

/// Failure reported by a [`ParameterStore`](crate::store::ParameterStore).
///
/// Store implementations map their native error codes into these variants
/// once, at the boundary. Nothing upstream inspects raw error strings.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The named parameter does not exist. Expected on first run.
    #[error("parameter {name} not found")]
    NotFound { name: ParameterName },

    /// The store refused the call because of request rate or parameter limits.
    #[error("parameter store rate limit exceeded: {message}")]
    RateLimited { message: String },

    /// The value does not satisfy the parameter's allowed pattern.
    #[error("value does not match the parameter's allowed pattern: {message}")]
    InvalidPattern { message: String },

    /// Another writer is updating the same parameter.
    #[error("concurrent update in progress: {message}")]
    ConcurrentUpdateConflict { message: String },

    /// Anything the boundary does not recognise.
    #[error("parameter store error ({}): {message}", code.as_deref().unwrap_or("unknown"))]
    Unknown {
        code: Option<String>,
        message: String,
    },
}
