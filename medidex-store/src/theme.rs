//! Theme preference store.
//!
//! Holds the light/dark flag, persists it to the preference slot, and
//! mirrors it to an applied display attribute on every change. Constructed
//! explicitly and passed to consumers; there is no module-level global.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::error::StoreError;
use crate::persistence::{default_theme_path, read_slot, write_slot};

/// The two display themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme (the default).
    #[default]
    Light,
    /// Dark theme.
    Dark,
}

impl Theme {
    /// The persisted literal for this theme.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Decodes a slot value. Exactly the literal `dark` means dark;
    /// everything else, including absence, means light.
    pub fn from_slot(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

struct ThemeInner {
    theme: Theme,
    /// The display attribute as last mirrored; `None` until the first
    /// initialize or toggle.
    applied: Option<Theme>,
}

/// Persistent theme preference store.
///
/// Single writer by construction: share one instance (via `Arc` or clone)
/// rather than creating several against the same slot.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<RwLock<ThemeInner>>,
    path: PathBuf,
}

impl ThemeStore {
    /// Creates a store against the given slot path.
    pub fn new(path: PathBuf) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ThemeInner {
                theme: Theme::Light,
                applied: None,
            })),
            path,
        }
    }

    /// Creates a store against the default slot path.
    pub fn at_default_path() -> Self {
        Self::new(default_theme_path())
    }

    /// The slot path this store persists to.
    pub fn slot_path(&self) -> &Path {
        &self.path
    }

    /// Initializes the theme from the persisted slot.
    ///
    /// Exactly the stored literal `dark` yields dark; everything else
    /// (including absence) yields light. The display attribute and slot are
    /// re-applied afterward so the attribute is never left unset. Safe to
    /// call repeatedly; idempotent given an unchanged slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written back.
    pub async fn initialize(&self) -> Result<Theme, StoreError> {
        let stored = read_slot(&self.path).await;
        let theme = Theme::from_slot(stored.as_deref());
        debug!(theme = %theme, "Initializing theme from slot");

        let mut inner = self.inner.write().await;
        inner.theme = theme;
        inner.applied = Some(theme);
        drop(inner);

        write_slot(&self.path, theme.as_str()).await?;
        Ok(theme)
    }

    /// Flips the theme, then persists and re-applies the display attribute.
    ///
    /// # Errors
    ///
    /// Returns an error if the slot cannot be written. The in-memory flag
    /// and attribute are updated regardless.
    pub async fn toggle(&self) -> Result<Theme, StoreError> {
        let mut inner = self.inner.write().await;
        let next = match inner.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
        inner.theme = next;
        inner.applied = Some(next);
        drop(inner);

        info!(theme = %next, "Theme toggled");
        write_slot(&self.path, next.as_str()).await?;
        Ok(next)
    }

    /// Current theme.
    pub async fn theme(&self) -> Theme {
        self.inner.read().await.theme
    }

    /// Whether the current theme is dark.
    pub async fn is_dark(&self) -> bool {
        self.inner.read().await.theme == Theme::Dark
    }

    /// The display attribute as last mirrored, or `None` if the store has
    /// never been initialized or toggled.
    pub async fn applied(&self) -> Option<Theme> {
        self.inner.read().await.applied
    }
}
