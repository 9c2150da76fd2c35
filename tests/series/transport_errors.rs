use crate::common;
use alphavantage_rs::{AvClient, AvError, TransportError};
use httpmock::Method::GET;
use std::time::Duration;
use url::Url;

#[tokio::test]
async fn non_2xx_is_status_error_without_retry() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(503).body("Service Unavailable");
    });

    let client = common::client_for(&server);
    let err = client.daily("FAIL").fetch().await.unwrap_err();

    // one attempt, no retries
    mock.assert_hits(1);

    match err {
        AvError::Transport(TransportError::Status { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.contains("/query"));
            assert!(url.contains("symbol=FAIL"));
            assert!(!url.contains(common::API_KEY), "API key leaked into {url}");
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unparsable_body_is_malformed() {
    let server = common::setup_server();
    let mock = common::mock_any(&server, "<html>maintenance</html>");

    let client = common::client_for(&server);
    let err = client.monthly("IBM").fetch().await.unwrap_err();
    mock.assert();
    assert!(matches!(
        err,
        AvError::Transport(TransportError::MalformedBody(_))
    ));
}

#[tokio::test]
async fn json_that_is_not_an_object_is_malformed() {
    let server = common::setup_server();
    let mock = common::mock_any(&server, "[1, 2, 3]");

    let client = common::client_for(&server);
    let err = client.weekly("IBM").fetch().await.unwrap_err();
    mock.assert();
    assert!(matches!(
        err,
        AvError::Transport(TransportError::MalformedBody(_))
    ));
}

#[tokio::test]
async fn slow_server_surfaces_timeout() {
    let server = common::setup_server();
    let _mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body(common::fixture("daily_IBM"));
    });

    let client = AvClient::builder()
        .api_key(common::API_KEY)
        .base_url(Url::parse(&server.url("/query")).unwrap())
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.daily("IBM").fetch().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn connection_refused_is_transport_error() {
    // nothing listens on port 9 (discard) locally
    let client = AvClient::builder()
        .api_key(common::API_KEY)
        .base_url(Url::parse("http://127.0.0.1:9/query").unwrap())
        .build()
        .unwrap();

    let err = client.daily("IBM").fetch().await.unwrap_err();
    assert!(matches!(err, AvError::Transport(TransportError::Http(_))));
}
