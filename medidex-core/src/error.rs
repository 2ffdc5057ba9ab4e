//! Core error type and display classification for Medidex.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Fallback display message when a failure carries neither a status nor
/// any usable message text.
pub const FALLBACK_MESSAGE: &str = "Failed to load doctors";

/// Fixed message for a by-id lookup that matched no record.
pub const DOCTOR_AWAY_MESSAGE: &str = "The doctor is away, please try again later.";

/// Matches the gateway's fixed failure text so the status code can be
/// recovered from errors that arrive as plain strings.
static HTTP_STATUS_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"HTTP error! status: (\d+)").expect("status pattern is valid")
});

/// A classified directory failure: a human-readable message plus the HTTP
/// status code, when the failure originated from an HTTP response.
///
/// `status` is `None` for transport failures, malformed bodies, and the
/// not-found lookup outcome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DirectoryError {
    /// Raw failure message.
    pub message: String,
    /// HTTP status code, when one exists.
    pub status: Option<u16>,
}

impl DirectoryError {
    /// Creates an error from an HTTP status code, in the gateway's fixed
    /// textual form.
    pub fn from_status(status: u16) -> Self {
        Self {
            message: format!("HTTP error! status: {status}"),
            status: Some(status),
        }
    }

    /// Creates a status-less error from a message.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: None,
        }
    }

    /// The fixed not-found failure for single-record lookup.
    pub fn doctor_away() -> Self {
        Self::from_message(DOCTOR_AWAY_MESSAGE)
    }

    /// Maps this failure to its user-facing display message.
    ///
    /// Classification is deterministic: an explicit status (or one recovered
    /// from the gateway's fixed `HTTP error! status: <code>` text) maps
    /// through the status table; otherwise a non-empty message is shown
    /// verbatim, and an empty one falls back to [`FALLBACK_MESSAGE`].
    pub fn display_message(&self) -> String {
        if let Some(status) = self.status.or_else(|| self.recovered_status()) {
            return message_for_status(status);
        }

        if self.message.is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            self.message.clone()
        }
    }

    /// Recovers a status code from the fixed gateway failure text, if the
    /// message matches it.
    fn recovered_status(&self) -> Option<u16> {
        HTTP_STATUS_PATTERN
            .captures(&self.message)
            .and_then(|caps| caps.get(1))
            .and_then(|code| code.as_str().parse().ok())
    }
}

/// Maps an HTTP status code to its display message.
fn message_for_status(status: u16) -> String {
    match status {
        404 => "Doctors not found".to_string(),
        500 => "Server error - please try again later".to_string(),
        401 => "Unauthorized access".to_string(),
        403 => "Access forbidden".to_string(),
        other => format!("Request failed ({other})"),
    }
}
