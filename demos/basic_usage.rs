//! Fetch IBM bars from every endpoint.
//!
//! Run with: cargo run --example basic_usage --features tracing-subscriber
//! The API key comes from `ALPHA_VANTAGE_API_KEY`, optionally loaded from `.env`.

use alphavantage_rs::{AvClient, AvError, Interval, SortOrder, TimeSeries};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = AvClient::new(None)?;

    let intraday = client
        .intraday("IBM")
        .interval(Interval::Min15)
        .sort(SortOrder::Ascending)
        .fetch()
        .await;
    report("intraday 15min", intraday);

    report("daily", client.daily("IBM").fetch().await);
    report("weekly", client.weekly("IBM").fetch().await);
    report("monthly", client.monthly("IBM").fetch().await);

    match client.daily("NOT-A-TICKER-XYZ").fetch().await {
        Err(AvError::Provider(msg)) => println!("bad symbol rejected by provider: {msg}"),
        Err(e) => println!("bad symbol failed: {e}"),
        Ok(_) => println!("bad symbol unexpectedly returned data"),
    }

    Ok(())
}

fn report(label: &str, result: Result<TimeSeries, AvError>) {
    match result {
        Ok(series) => {
            println!("{label}: {} rows, columns {:?}", series.table.len(), series.table.columns());
            if let Some(row) = series.table.rows().last() {
                println!("  last {} close={:?}", row.timestamp, row.get("close"));
            }
            if let Some(notice) = series.notice {
                println!("  provider notice: {notice:?}");
            }
        }
        Err(e) => println!("{label}: {e}"),
    }
}
