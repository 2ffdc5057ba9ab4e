//! Canned directory endpoint for integration tests.
//!
//! Serves `GET /api` with a configurable status and JSON body so the fetch
//! gateway and loaders can be exercised over real HTTP. The fixture is fixed
//! at router construction; tests wanting a different response start a fresh
//! server, which is cheap on a random port.

use std::net::SocketAddr;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use serde_json::{Value, json};
use tokio::net::TcpListener;

/// The canned response served by the mock directory endpoint.
#[derive(Debug, Clone)]
pub struct Fixture {
    /// Status code to answer with.
    pub status: StatusCode,
    /// JSON body to answer with.
    pub body: Value,
}

impl Fixture {
    /// A 200 response with the given body.
    pub fn ok(body: Value) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// A failure response with the given status and an empty object body.
    pub fn failing(status: u16) -> Self {
        Self {
            status: StatusCode::from_u16(status).expect("valid status code"),
            body: json!({}),
        }
    }
}

/// A small sample directory in the bare-array shape.
pub fn sample_doctors() -> Value {
    json!([
        {
            "id": "1",
            "first_name": "Greta",
            "last_name": "Houde",
            "state": "VT",
            "license_active": true,
            "date_of_birth": "1981-04-12",
            "registered_at": "2009-08-30"
        },
        {
            "id": "2",
            "first_name": "Ade",
            "last_name": "Okafor",
            "state": "TX",
            "license_active": false,
            "date_of_birth": "1969-12-01",
            "registered_at": "1997-05-22"
        }
    ])
}

/// Builds a router serving the fixture at `GET /api`.
pub fn app(fixture: Fixture) -> Router {
    Router::new().route(
        "/api",
        get(move || {
            let fixture = fixture.clone();
            async move { (fixture.status, axum::Json(fixture.body)).into_response() }
        }),
    )
}

/// Binds a random local port, serves the fixture in a background task, and
/// returns the bound address.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound.
pub async fn serve(fixture: Fixture) -> std::io::Result<SocketAddr> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app(fixture)).await;
    });
    Ok(addr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_directory_has_two_records() {
        let doctors = sample_doctors();
        assert_eq!(doctors.as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn failing_fixture_carries_status() {
        let fixture = Fixture::failing(503);
        assert_eq!(fixture.status, StatusCode::SERVICE_UNAVAILABLE);
    }
}
