use crate::common;
use alphavantage_rs::{AvError, OutputSize, SortOrder};
use chrono::NaiveDate;
use httpmock::Method::GET;

#[tokio::test]
async fn daily_offline_normalizes_fixture() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("symbol", "IBM")
            .query_param("outputsize", "compact")
            .query_param("datatype", "json")
            .query_param("apikey", common::API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("daily_IBM"));
    });

    let client = common::client_for(&server);
    let series = client.daily("IBM").fetch().await.unwrap();
    mock.assert();

    let table = &series.table;
    assert_eq!(table.len(), 3);
    assert_eq!(table.columns(), ["open", "high", "low", "close", "volume"]);

    // provider order: newest first
    let first = NaiveDate::from_ymd_opt(2024, 1, 4).unwrap().and_hms_opt(0, 0, 0).unwrap();
    assert_eq!(table.index()[0], first);
    assert_eq!(table.value(0, "close"), Some(161.10));
    assert_eq!(table.value(2, "volume"), Some(4_172_851.0));

    let meta = series.meta.expect("meta block");
    assert_eq!(meta.symbol.as_deref(), Some("IBM"));
    assert_eq!(meta.tz(), Some(chrono_tz::US::Eastern));
    assert!(series.notice.is_none());
}

#[tokio::test]
async fn daily_single_row_round_trip() {
    let server = common::setup_server();
    let body = r#"{"Time Series (Daily)": {"2024-01-02": {"1. open": "100.0", "2. high": "105.0", "3. low": "99.0", "4. close": "104.0", "5. volume": "1000"}}}"#;
    let mock = common::mock_function(&server, "TIME_SERIES_DAILY", body.to_string());

    let client = common::client_for(&server);
    let table = client.daily("X").fetch().await.unwrap().into_table();
    mock.assert();

    assert_eq!(table.len(), 1);
    let row = table.row(0).unwrap();
    assert_eq!(
        row.timestamp.date(),
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()
    );
    assert_eq!(row.get("open"), Some(100.0));
    assert_eq!(row.get("high"), Some(105.0));
    assert_eq!(row.get("low"), Some(99.0));
    assert_eq!(row.get("close"), Some(104.0));
    assert_eq!(row.get("volume"), Some(1000.0));
}

#[tokio::test]
async fn daily_full_output_and_ascending_sort() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "TIME_SERIES_DAILY")
            .query_param("outputsize", "full");
        then.status(200).body(common::fixture("daily_IBM"));
    });

    let client = common::client_for(&server);
    let series = client
        .daily("IBM")
        .output_size(OutputSize::Full)
        .sort(SortOrder::Ascending)
        .fetch()
        .await
        .unwrap();
    mock.assert();

    let closes = series.table.column("close").unwrap();
    assert_eq!(closes, [161.50, 160.10, 161.10]);
    assert!(series.table.index().windows(2).all(|w| w[0] < w[1]));
}

#[tokio::test]
async fn daily_missing_key_names_symbol() {
    let server = common::setup_server();
    let mock = common::mock_any(&server, r#"{"Meta Data": {"2. Symbol": "BOGUS"}}"#);

    let client = common::client_for(&server);
    let err = client.daily("BOGUS").fetch().await.unwrap_err();
    mock.assert();

    match &err {
        AvError::DataNotFound { symbol, interval } => {
            assert_eq!(symbol, "BOGUS");
            assert!(interval.is_none());
        }
        other => panic!("expected DataNotFound, got {other:?}"),
    }
    assert!(err.to_string().contains("BOGUS"));
}

#[tokio::test]
async fn empty_symbol_is_rejected_before_any_request() {
    let server = common::setup_server();
    let mock = common::mock_any(&server, "{}");

    let client = common::client_for(&server);
    let err = client.daily("  ").fetch().await.unwrap_err();
    assert!(matches!(err, AvError::Config(_)));
    mock.assert_hits(0);
}
