//! Gateway tests over real HTTP against the mock directory endpoint.

use medidex_fetch::{DirectoryGateway, FetchError, HttpClient};
use medidex_mock_server::{Fixture, sample_doctors, serve};
use serde_json::json;

async fn gateway_for(fixture: Fixture) -> DirectoryGateway {
    let addr = serve(fixture).await.expect("mock server starts");
    DirectoryGateway::new(HttpClient::default(), &format!("http://{addr}/api"))
        .expect("valid base url")
}

#[tokio::test]
async fn fetches_bare_array_collection() {
    let gateway = gateway_for(Fixture::ok(sample_doctors())).await;
    let doctors = gateway.fetch_doctors().await.unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].id, "1");
    assert_eq!(doctors[0].full_name(), "Greta Houde");
}

#[tokio::test]
async fn fetches_keyed_object_collection() {
    let gateway = gateway_for(Fixture::ok(json!({ "doctors": sample_doctors() }))).await;
    let doctors = gateway.fetch_doctors().await.unwrap();
    assert_eq!(doctors.len(), 2);
}

#[tokio::test]
async fn unknown_body_shape_yields_empty_directory() {
    let gateway = gateway_for(Fixture::ok(json!({}))).await;
    let doctors = gateway.fetch_doctors().await.unwrap();
    assert!(doctors.is_empty());
}

#[tokio::test]
async fn non_success_status_raises_fixed_error_text() {
    let gateway = gateway_for(Fixture::failing(500)).await;
    let err = gateway.fetch_doctors().await.unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
    assert_eq!(
        err.classify().display_message(),
        "Server error - please try again later"
    );
}

#[tokio::test]
async fn not_found_status_classifies_per_table() {
    let gateway = gateway_for(Fixture::failing(404)).await;
    let err = gateway.fetch_doctors().await.unwrap_err();
    assert!(matches!(err, FetchError::Status { status: 404 }));
    assert_eq!(err.classify().display_message(), "Doctors not found");
}

#[tokio::test]
async fn other_status_classifies_as_request_failed() {
    let gateway = gateway_for(Fixture::failing(418)).await;
    let err = gateway.fetch_doctors().await.unwrap_err();
    assert_eq!(err.classify().display_message(), "Request failed (418)");
}

#[tokio::test]
async fn by_id_lookup_returns_synthetic_envelope() {
    let gateway = gateway_for(Fixture::ok(sample_doctors())).await;
    let envelope = gateway.fetch_doctor_by_id("2").await.unwrap();

    assert_eq!(envelope.status(), 200);
    assert_eq!(envelope.content_type(), "application/json");

    let doctor = envelope.doctor().unwrap();
    assert_eq!(doctor.id, "2");
    assert_eq!(doctor.full_name(), "Ade Okafor");
}

#[tokio::test]
async fn by_id_lookup_is_case_sensitive() {
    let gateway = gateway_for(Fixture::ok(json!([
        {
            "id": "abc",
            "first_name": "Noor",
            "last_name": "Haddad",
            "state": "MN",
            "license_active": true,
            "date_of_birth": "1984-07-19",
            "registered_at": "2012-03-05"
        }
    ])))
    .await;

    let err = gateway.fetch_doctor_by_id("ABC").await.unwrap_err();
    assert!(matches!(err, FetchError::DoctorAway));
}

#[tokio::test]
async fn absent_id_raises_fixed_away_message_without_status() {
    let gateway = gateway_for(Fixture::ok(sample_doctors())).await;
    let err = gateway.fetch_doctor_by_id("999").await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "The doctor is away, please try again later."
    );
    let classified = err.classify();
    assert_eq!(classified.status, None);
}

#[tokio::test]
async fn transport_failure_classifies_without_status() {
    // Nothing listens on this port.
    let gateway =
        DirectoryGateway::new(HttpClient::default(), "http://127.0.0.1:1/api").unwrap();
    let err = gateway.fetch_doctors().await.unwrap_err();
    assert!(matches!(err, FetchError::Http(_)));
    let classified = err.classify();
    assert_eq!(classified.status, None);
    assert!(!classified.display_message().is_empty());
}
