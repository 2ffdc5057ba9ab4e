//! Domain models for the practitioner directory.

mod doctor;

pub use doctor::{CollectionBody, Doctor};
