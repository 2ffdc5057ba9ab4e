// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Medidex Fetch
//!
//! HTTP gateway for the Medidex practitioner directory.
//!
//! This crate wraps the single outbound call to the directory endpoint and
//! derives the by-id lookup from it:
//!
//! - [`HttpClient`] - reqwest wrapper with timeout and user agent
//! - [`DirectoryGateway`] - collection fetch plus derived single-record
//!   lookup with a synthetic [`RecordEnvelope`]
//! - [`FetchError`] - failure taxonomy, convertible into the classified
//!   [`medidex_core::DirectoryError`]
//!
//! Retry is deliberately not handled here; it is a loader-level concern.
//!
//! ## Example
//!
//! ```ignore
//! use medidex_fetch::{DirectoryGateway, HttpClient};
//!
//! let gateway = DirectoryGateway::new(HttpClient::new()?, "http://localhost:3000/api");
//! let response = gateway.fetch_collection().await?;
//! let envelope = gateway.fetch_doctor_by_id("42").await?;
//! ```

pub mod client;
pub mod error;
pub mod gateway;

pub use client::HttpClient;
pub use error::FetchError;
pub use gateway::{DirectoryGateway, RecordEnvelope};
