//! CLI command implementations.

pub mod list;
pub mod show;
pub mod theme;
