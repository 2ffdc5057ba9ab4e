// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Medidex Core
//!
//! Core types, models, and traits for the Medidex practitioner directory.
//!
//! This crate provides the foundational abstractions used across all other
//! Medidex crates, including:
//!
//! - The [`Doctor`] domain model
//! - Lenient decoding of the directory collection body ([`CollectionBody`])
//! - The classified error type ([`DirectoryError`]) and its deterministic
//!   display-message classification
//! - The [`DoctorSource`] trait that loaders consume
//!
//! ## Key Types
//!
//! - [`Doctor`] - A single practitioner record
//! - [`CollectionBody`] - Either a bare array or a `{"doctors": [...]}` object
//! - [`DirectoryError`] - Message plus optional HTTP status
//! - [`DoctorSource`] - Async seam between loaders and the HTTP gateway

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::DirectoryError;

// Re-export model types
pub use models::{CollectionBody, Doctor};

// Re-export traits
pub use traits::DoctorSource;
