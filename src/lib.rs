//! alphavantage-rs: ergonomic Alpha Vantage client.
//!
//! Calls to the stock time-series endpoints become a single GET against the
//! provider's query API; the JSON reply is classified (error, advisory, data)
//! and the series is reshaped into a [`TimeSeriesTable`] indexed by parsed
//! timestamps with one `f64` column per field.
//!
//! ```no_run
//! # use alphavantage_rs::{AvClient, OutputSize, SortOrder};
//! # #[tokio::main]
//! # async fn main() -> Result<(), alphavantage_rs::AvError> {
//! let client = AvClient::new(Some("demo"))?;
//! let daily = client
//!     .daily("IBM")
//!     .output_size(OutputSize::Compact)
//!     .sort(SortOrder::Ascending)
//!     .fetch()
//!     .await?;
//! for row in daily.table.rows().take(3) {
//!     println!("{} close={:?}", row.timestamp, row.get("close"));
//! }
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod series;

pub use crate::core::client::{API_KEY_ENV, AUTH_PARAM};
pub use crate::core::{AvClient, AvClientBuilder, AvError, ProviderNotice, TransportError};
pub use series::{
    DailyBuilder, DataType, IntradayBuilder, Interval, OutputSize, PeriodicBuilder, Row,
    SeriesMeta, SortOrder, TimeSeries, TimeSeriesTable,
};

#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
