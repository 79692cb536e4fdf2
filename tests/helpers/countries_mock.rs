//! Mock REST Countries API server for testing
//!
//! Uses wiremock to serve canned `/v3.1/name/{name}` responses.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Mock countries API server
pub struct CountriesMockServer {
    pub server: MockServer,
}

impl CountriesMockServer {
    /// Start a new mock server
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Base URL to put into `countries.api_url`
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Respond to a lookup of `encoded_name` with `body` and `status`
    pub async fn mock_lookup(&self, encoded_name: &str, status: u16, body: Value) {
        Mock::given(method("GET"))
            .and(path(format!("/v3.1/name/{}", encoded_name)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Respond to a lookup with a raw, possibly malformed, body
    pub async fn mock_raw_lookup(&self, encoded_name: &str, status: u16, body: &str) {
        Mock::given(method("GET"))
            .and(path(format!("/v3.1/name/{}", encoded_name)))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// France as the API returns it, trimmed to the fields the bot reads plus noise
    pub async fn mock_france(&self) {
        self.mock_lookup("France", 200, france_json()).await;
    }

    /// 404 for names that match nothing
    pub async fn mock_not_found(&self, encoded_name: &str) {
        self.mock_lookup(
            encoded_name,
            404,
            json!({"status": 404, "message": "Not Found"}),
        )
        .await;
    }

    /// Number of requests the server has seen
    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn france_json() -> Value {
    json!([
        {
            "name": {"common": "France", "official": "French Republic"},
            "tld": [".fr"],
            "capital": ["Paris"],
            "region": "Europe",
            "subregion": "Western Europe",
            "population": 67391582,
            "languages": {"fra": "French"}
        },
        {
            "name": {"common": "French Guiana"},
            "capital": ["Cayenne"],
            "region": "Americas",
            "population": 254541,
            "languages": {"fra": "French"}
        }
    ])
}
