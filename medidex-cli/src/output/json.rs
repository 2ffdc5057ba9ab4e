//! JSON output formatting for scripting.

use anyhow::Result;
use medidex_core::{DirectoryError, Doctor};
use serde_json::json;

/// JSON formatter with optional pretty printing.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats the directory as a JSON array.
    pub fn format_doctors(&self, doctors: &[Doctor]) -> Result<String> {
        self.render(&serde_json::to_value(doctors)?)
    }

    /// Formats a single practitioner.
    pub fn format_doctor(&self, doctor: &Doctor) -> Result<String> {
        self.render(&serde_json::to_value(doctor)?)
    }

    /// Formats a classified failure.
    pub fn format_error(&self, error: &DirectoryError) -> Result<String> {
        self.render(&json!({
            "error": error.display_message(),
            "status": error.status,
        }))
    }

    fn render(&self, value: &serde_json::Value) -> Result<String> {
        Ok(if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        })
    }
}
