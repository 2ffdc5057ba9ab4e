//! Trait definitions for Medidex.
//!
//! This module defines the seam between loaders and whatever produces the
//! directory data (HTTP gateway in production, stubs in tests).

use crate::error::DirectoryError;
use crate::models::Doctor;

/// Trait for sources that can fetch the practitioner directory.
///
/// Implementors are responsible for issuing the collection fetch, decoding
/// the body, and surfacing failures as classified [`DirectoryError`]s.
/// Loaders stay generic over this trait so state-machine behavior can be
/// tested without the network.
pub trait DoctorSource: Send + Sync {
    /// Fetches the full practitioner directory.
    ///
    /// An empty directory is a successful outcome, not an error.
    fn fetch_directory(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<Doctor>, DirectoryError>> + Send;
}
