//! Directory gateway: collection fetch and derived by-id lookup.

use medidex_core::{CollectionBody, DirectoryError, Doctor, DoctorSource};
use reqwest::Response;
use tracing::{debug, warn};
use url::Url;

use crate::client::HttpClient;
use crate::error::FetchError;

/// Gateway to the single directory collection endpoint.
///
/// There is no dedicated single-record endpoint on the backend; the by-id
/// lookup re-fetches the full collection and scans it client-side.
#[derive(Debug, Clone)]
pub struct DirectoryGateway {
    client: HttpClient,
    base_url: String,
}

impl DirectoryGateway {
    /// Creates a gateway for the given collection endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not a valid absolute URL.
    pub fn new(client: HttpClient, base_url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(base_url)?;
        Ok(Self {
            client,
            base_url: url.to_string(),
        })
    }

    /// The collection endpoint URL this gateway targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Performs the single collection GET and returns the raw response.
    ///
    /// A non-success status is surfaced as [`FetchError::Status`]; parsing
    /// the body is the caller's responsibility. No retries at this layer.
    pub async fn fetch_collection(&self) -> Result<Response, FetchError> {
        debug!(url = %self.base_url, "Fetching directory collection");
        let response = self.client.get(&self.base_url).await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "Collection fetch failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Fetches and decodes the full collection.
    ///
    /// Accepts a bare array or a `{"doctors": [...]}` object; any other
    /// body shape decodes to an empty directory.
    pub async fn fetch_doctors(&self) -> Result<Vec<Doctor>, FetchError> {
        let response = self.fetch_collection().await?;
        let body: CollectionBody = response.json().await?;
        let doctors = body.into_doctors();
        debug!(count = doctors.len(), "Decoded directory collection");
        Ok(doctors)
    }

    /// Looks up a single record by identifier.
    ///
    /// Re-issues the full collection fetch and linear-scans for the first
    /// record whose id matches exactly (case-sensitive). O(n) per call, no
    /// memoization. A miss raises [`FetchError::DoctorAway`]; a hit is
    /// wrapped in a synthetic [`RecordEnvelope`] indistinguishable in shape
    /// from a dedicated single-record endpoint.
    pub async fn fetch_doctor_by_id(&self, id: &str) -> Result<RecordEnvelope, FetchError> {
        debug!(id = %id, "Looking up doctor by id");
        let doctors = self.fetch_doctors().await?;

        let found = doctors.into_iter().find(|doctor| doctor.id == id);
        match found {
            Some(doctor) => RecordEnvelope::wrap(&doctor),
            None => {
                warn!(id = %id, "Doctor not found in collection");
                Err(FetchError::DoctorAway)
            }
        }
    }
}

impl DoctorSource for DirectoryGateway {
    async fn fetch_directory(&self) -> Result<Vec<Doctor>, DirectoryError> {
        self.fetch_doctors().await.map_err(|e| e.classify())
    }
}

/// Synthetic single-record response envelope.
///
/// Mimics the caller-visible shape of a real per-id endpoint: status 200,
/// JSON content type, single record body.
#[derive(Debug, Clone)]
pub struct RecordEnvelope {
    status: u16,
    content_type: &'static str,
    body: String,
}

impl RecordEnvelope {
    /// Serializes a record into an envelope.
    fn wrap(doctor: &Doctor) -> Result<Self, FetchError> {
        Ok(Self {
            status: 200,
            content_type: "application/json",
            body: serde_json::to_string(doctor)?,
        })
    }

    /// HTTP-equivalent status code. Always 200.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Content-type marker. Always `application/json`.
    pub fn content_type(&self) -> &str {
        self.content_type
    }

    /// Raw JSON body.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Decodes the wrapped record.
    ///
    /// # Errors
    ///
    /// Returns an error if the body does not decode as a record, which
    /// would indicate a bug in envelope construction.
    pub fn doctor(&self) -> Result<Doctor, FetchError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn sample_doctor() -> Doctor {
        Doctor {
            id: "7".to_string(),
            first_name: "Iris".to_string(),
            last_name: "Kohn".to_string(),
            state: "NM".to_string(),
            license_active: true,
            date_of_birth: NaiveDate::from_ymd_opt(1970, 6, 1).unwrap(),
            registered_at: NaiveDate::from_ymd_opt(1999, 2, 14).unwrap(),
        }
    }

    #[test]
    fn envelope_mimics_dedicated_endpoint() {
        let envelope = RecordEnvelope::wrap(&sample_doctor()).unwrap();
        assert_eq!(envelope.status(), 200);
        assert_eq!(envelope.content_type(), "application/json");
        assert_eq!(envelope.doctor().unwrap(), sample_doctor());
    }

    #[test]
    fn gateway_rejects_invalid_base_url() {
        let result = DirectoryGateway::new(HttpClient::default(), "not a url");
        assert!(matches!(result, Err(FetchError::InvalidBaseUrl(_))));
    }

    #[test]
    fn gateway_keeps_base_url() {
        let gateway =
            DirectoryGateway::new(HttpClient::default(), "http://localhost:3000/api").unwrap();
        assert_eq!(gateway.base_url(), "http://localhost:3000/api");
    }
}
