//! File persistence for the preference slot.
//!
//! The theme contract is an exact string literal, so the slot is stored as a
//! raw string file rather than JSON.

use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::StoreError;

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default configuration directory.
///
/// - macOS: `~/Library/Application Support/Medidex`
/// - Linux: `~/.config/medidex`
/// - Windows: `%APPDATA%\Medidex`
pub fn default_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support").join("Medidex"))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    #[cfg(not(target_os = "macos"))]
    {
        dirs::config_dir()
            .map(|c| c.join("medidex"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Returns the default theme slot path.
pub fn default_theme_path() -> PathBuf {
    default_config_dir().join("theme")
}

// ============================================================================
// Slot Operations
// ============================================================================

/// Reads the raw preference slot.
///
/// An absent file reads as `None`. Other IO failures are logged and also
/// read as `None`, because the preference contract treats an unreadable slot
/// the same as an absent one.
pub async fn read_slot(path: &Path) -> Option<String> {
    match tokio::fs::read_to_string(path).await {
        Ok(value) => {
            debug!(path = %path.display(), value = %value, "Read preference slot");
            Some(value)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to read preference slot");
            None
        }
    }
}

/// Writes the raw preference slot.
///
/// Creates parent directories if they don't exist and writes atomically
/// (via temp file + rename).
pub async fn write_slot(path: &Path, value: &str) -> Result<(), StoreError> {
    debug!(path = %path.display(), value = %value, "Writing preference slot");

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!(path = %parent.display(), "Creating config directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let temp_path = path.with_extension("tmp");
    tokio::fs::write(&temp_path, value).await?;
    tokio::fs::rename(&temp_path, path).await?;

    Ok(())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_dir() {
        let path = default_config_dir();
        assert!(!path.as_os_str().is_empty());
    }

    #[test]
    fn test_default_theme_path() {
        let path = default_theme_path();
        assert!(path.ends_with("theme"));
    }

    #[tokio::test]
    async fn absent_slot_reads_as_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let slot = temp_dir.path().join("theme");
        assert_eq!(read_slot(&slot).await, None);
    }

    #[tokio::test]
    async fn slot_round_trips_exact_literal() {
        let temp_dir = tempfile::tempdir().unwrap();
        let slot = temp_dir.path().join("theme");

        write_slot(&slot, "dark").await.unwrap();
        assert_eq!(read_slot(&slot).await.as_deref(), Some("dark"));

        write_slot(&slot, "light").await.unwrap();
        assert_eq!(read_slot(&slot).await.as_deref(), Some("light"));
    }

    #[tokio::test]
    async fn write_creates_missing_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let slot = temp_dir.path().join("nested").join("deeper").join("theme");

        write_slot(&slot, "dark").await.unwrap();
        assert_eq!(read_slot(&slot).await.as_deref(), Some("dark"));
    }
}
