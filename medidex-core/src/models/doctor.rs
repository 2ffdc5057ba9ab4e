//! Practitioner record and collection-body types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single practitioner record.
///
/// Records are immutable once fetched; every fetch produces fresh copies and
/// there is no cross-request identity or caching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Doctor {
    /// Opaque unique identifier.
    pub id: String,
    /// Given name.
    #[serde(alias = "firstName")]
    pub first_name: String,
    /// Family name.
    #[serde(alias = "lastName")]
    pub last_name: String,
    /// Two-letter jurisdiction code.
    pub state: String,
    /// Whether the practitioner's license is currently active.
    #[serde(alias = "licenseActive")]
    pub license_active: bool,
    /// Date of birth.
    #[serde(alias = "dateOfBirth")]
    pub date_of_birth: NaiveDate,
    /// Registration date.
    #[serde(alias = "registeredAt", alias = "registrationDate")]
    pub registered_at: NaiveDate,
}

impl Doctor {
    /// Full display name, given name first.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// The directory collection body in either of its two accepted shapes.
///
/// The endpoint may return a bare array of records or an object with a
/// `doctors` field holding that array. Any other JSON shape decodes to
/// [`CollectionBody::Other`], which yields an empty list rather than a
/// failure.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum CollectionBody {
    /// Bare array of records.
    Bare(Vec<Doctor>),
    /// Object wrapping the array in a `doctors` field.
    Keyed {
        /// The wrapped records.
        doctors: Vec<Doctor>,
    },
    /// Anything else. Treated as an empty directory.
    Other(serde_json::Value),
}

impl CollectionBody {
    /// Consumes the body and returns the record list, empty for unknown
    /// shapes.
    pub fn into_doctors(self) -> Vec<Doctor> {
        match self {
            CollectionBody::Bare(doctors) | CollectionBody::Keyed { doctors } => doctors,
            CollectionBody::Other(_) => Vec::new(),
        }
    }
}
