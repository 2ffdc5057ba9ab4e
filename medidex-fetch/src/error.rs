//! Fetch error types.

use medidex_core::DirectoryError;
use thiserror::Error;

/// Error type for fetch operations.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure (connect, timeout, body read, decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status code.
    ///
    /// The rendered text is the gateway's fixed form; downstream
    /// classification depends on it staying exactly this shape.
    #[error("HTTP error! status: {status}")]
    Status {
        /// The non-success status code.
        status: u16,
    },

    /// By-id lookup matched no record in the collection.
    #[error("The doctor is away, please try again later.")]
    DoctorAway,

    /// JSON serialization error while building the synthetic envelope.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
}

impl FetchError {
    /// Converts this failure into the classified form the loaders and the
    /// presentation layer consume.
    ///
    /// Status-bearing failures carry their code structurally, so no message
    /// re-parsing is needed on this path.
    pub fn classify(&self) -> DirectoryError {
        match self {
            FetchError::Status { status } => DirectoryError::from_status(*status),
            FetchError::DoctorAway => DirectoryError::doctor_away(),
            other => DirectoryError::from_message(other.to_string()),
        }
    }
}
