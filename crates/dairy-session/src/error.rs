//! Session error types.

use thiserror::Error;

/// Errors that can occur when reading or writing session state.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Failed to serialize or deserialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The underlying store rejected the operation.
    #[error("Store operation failed: {0}")]
    StoreError(String),
}
