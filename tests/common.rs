#![allow(dead_code)]

use alphavantage_rs::AvClient;
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-key";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(name: &str) -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(format!("{name}.json"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn client_for(server: &MockServer) -> AvClient {
    AvClient::builder()
        .api_key(API_KEY)
        .base_url(Url::parse(&server.url("/query")).unwrap())
        .build()
        .unwrap()
}

/// Answer any request for `function` with `body`.
pub fn mock_function<'a>(server: &'a MockServer, function: &str, body: String) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", function)
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Answer every request with `body`, regardless of parameters.
pub fn mock_any<'a>(server: &'a MockServer, body: &str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
