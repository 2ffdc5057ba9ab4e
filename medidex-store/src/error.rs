//! Store error types.

use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error while reading or writing the preference slot.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
