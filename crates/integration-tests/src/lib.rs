//! Integration tests for the PokeAPI client.
//!
//! Tests run against a local `wiremock` server standing in for the catalog,
//! so they need no network access.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pokeapi-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `http_transport` - Status handling and the known-missing skip list
//! - `client_resolution` - Memoized fetches and link resolution over HTTP

use pokeapi_client::{Client, ClientConfig, HttpTransport};
use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Configuration pointing at a mock catalog.
#[must_use]
pub fn config_for(server: &MockServer) -> ClientConfig {
    ClientConfig::default().with_base_url(&server.uri())
}

/// Client talking to a mock catalog over HTTP.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn client_for(server: &MockServer) -> Client {
    Client::new(&config_for(server)).expect("Failed to create catalog client")
}

/// HTTP transport talking to a mock catalog.
///
/// # Panics
///
/// Panics if the HTTP client cannot be built.
#[must_use]
pub fn transport_for(server: &MockServer) -> HttpTransport {
    HttpTransport::new(&config_for(server)).expect("Failed to create transport")
}

/// Serve `body` with status 200 at `/{route}`, expecting exactly `times` hits.
pub async fn serve(server: &MockServer, route: &str, body: &Value, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{route}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(times)
        .mount(server)
        .await;
}

/// Serve `status` at `/{route}`, expecting exactly `times` hits.
pub async fn serve_status(server: &MockServer, route: &str, status: u16, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{route}")))
        .respond_with(ResponseTemplate::new(status).set_body_string("catalog says no"))
        .expect(times)
        .mount(server)
        .await;
}

/// Named link payload pointing into the mock catalog.
#[must_use]
pub fn named_link(server: &MockServer, kind: &str, name: &str, id: i64) -> Value {
    json!({"name": name, "url": format!("{}/{kind}/{id}/", server.uri())})
}

/// Minimal valid berry payload.
#[must_use]
pub fn berry(server: &MockServer, id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "growth_time": 3,
        "max_harvest": 5,
        "natural_gift_power": 60,
        "size": 20,
        "smoothness": 25,
        "soil_dryness": 15,
        "firmness": named_link(server, "berry-firmness", "soft", 2),
        "flavors": [],
        "item": named_link(server, "item", &format!("{name}-berry"), 126),
        "natural_gift_type": named_link(server, "type", "fire", 10)
    })
}

/// Minimal valid berry firmness payload.
#[must_use]
pub fn berry_firmness(server: &MockServer, id: i64, name: &str, berries: &[Value]) -> Value {
    json!({
        "id": id,
        "name": name,
        "berries": berries,
        "names": [{"name": "Soft", "language": named_link(server, "language", "en", 9)}]
    })
}
