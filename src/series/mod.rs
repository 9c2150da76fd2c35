//! Stock time series: intraday, daily, weekly and monthly bars.
//!
//! All four endpoints share one request/normalize path and differ only in the
//! `function` discriminator, their optional parameters, and the key the series
//! is found under in the response.

mod builder;
mod function;
mod model;
mod normalize;
mod params;

pub use builder::{DailyBuilder, IntradayBuilder, PeriodicBuilder};
pub use model::{Row, SeriesMeta, TimeSeries, TimeSeriesTable};
pub use params::{DataType, Interval, OutputSize, SortOrder};
