use crate::common;
use alphavantage_rs::AvError;

async fn daily_with(body: &str) -> AvError {
    let server = common::setup_server();
    let mock = common::mock_any(&server, body);
    let client = common::client_for(&server);
    let err = client.daily("IBM").fetch().await.unwrap_err();
    mock.assert();
    err
}

#[tokio::test]
async fn non_numeric_value_is_format_error() {
    let err = daily_with(
        r#"{"Time Series (Daily)": {"2024-01-02": {"1. open": "100.0", "4. close": "abc"}}}"#,
    )
    .await;
    assert!(matches!(err, AvError::DataFormat(ref m) if m.contains("abc")));
}

#[tokio::test]
async fn bad_timestamp_is_format_error() {
    let err = daily_with(r#"{"Time Series (Daily)": {"02/01/2024": {"1. open": "100.0"}}}"#).await;
    assert!(matches!(err, AvError::DataFormat(ref m) if m.contains("02/01/2024")));
}

#[tokio::test]
async fn field_without_ordinal_prefix_is_format_error() {
    let err = daily_with(r#"{"Time Series (Daily)": {"2024-01-02": {"open": "100.0"}}}"#).await;
    assert!(matches!(err, AvError::DataFormat(ref m) if m.contains("open")));
}

#[tokio::test]
async fn series_that_is_not_an_object_is_format_error() {
    let err = daily_with(r#"{"Time Series (Daily)": "none"}"#).await;
    assert!(matches!(err, AvError::DataFormat(_)));
}

#[tokio::test]
async fn fields_stripping_to_one_name_are_format_error() {
    let err = daily_with(
        r#"{"Time Series (Daily)": {"2024-01-02": {"1. open": "100.0", "1b. open": "101.0"}}}"#,
    )
    .await;
    assert!(matches!(err, AvError::DataFormat(ref m) if m.contains("duplicate") && m.contains("2024-01-02")));
}
