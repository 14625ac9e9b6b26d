//! Error types for the rollwatch deployment store.

use thiserror::Error;

/// Result type alias for deployment store operations.
pub type StateResult<T> = Result<T, StateError>;

/// Errors that can occur during deployment store operations.
#[derive(Debug, Error)]
pub enum StateError {
    /// The service has never been deployed.
    #[error("deploy not found: {0}")]
    NotFound(String),
}
