// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Medidex Store
//!
//! State management for the Medidex directory client.
//!
//! This crate provides:
//!
//! - **`DirectoryLoader`**: the asynchronous load lifecycle
//!   (idle/loading/loaded/failed) with retry and change notification
//! - **`ThemeStore`**: the persisted light/dark preference mirrored to a
//!   display attribute
//! - **Persistence**: file helpers for the raw preference slot
//!
//! ## Usage
//!
//! ```ignore
//! use medidex_store::{DirectoryLoader, ThemeStore};
//!
//! let loader = DirectoryLoader::new(gateway);
//! let state = loader.load().await;
//!
//! let theme = ThemeStore::at_default_path();
//! theme.initialize().await?;
//! theme.toggle().await?;
//! ```

pub mod error;
pub mod loader;
pub mod persistence;
pub mod theme;

pub use error::StoreError;
pub use loader::{DirectoryLoader, LoadState};
pub use persistence::{default_config_dir, default_theme_path, read_slot, write_slot};
pub use theme::{Theme, ThemeStore};
