use std::borrow::Cow;

use super::params::{DataType, Interval, OutputSize};

/// One of the four stock time-series endpoints and its endpoint-specific options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SeriesFunction {
    Intraday {
        interval: Interval,
        adjusted: bool,
        output_size: OutputSize,
    },
    Daily {
        output_size: OutputSize,
    },
    Weekly,
    Monthly,
}

impl SeriesFunction {
    /// The `function` discriminator.
    pub(crate) const fn discriminator(self) -> &'static str {
        match self {
            SeriesFunction::Intraday { .. } => "TIME_SERIES_INTRADAY",
            SeriesFunction::Daily { .. } => "TIME_SERIES_DAILY",
            SeriesFunction::Weekly => "TIME_SERIES_WEEKLY",
            SeriesFunction::Monthly => "TIME_SERIES_MONTHLY",
        }
    }

    /// Top-level key the series lives under in the response.
    pub(crate) fn series_key(self) -> Cow<'static, str> {
        match self {
            SeriesFunction::Intraday { interval, .. } => {
                Cow::Owned(format!("Time Series ({interval})"))
            }
            SeriesFunction::Daily { .. } => Cow::Borrowed("Time Series (Daily)"),
            SeriesFunction::Weekly => Cow::Borrowed("Weekly Time Series"),
            SeriesFunction::Monthly => Cow::Borrowed("Monthly Time Series"),
        }
    }

    pub(crate) const fn interval(self) -> Option<Interval> {
        match self {
            SeriesFunction::Intraday { interval, .. } => Some(interval),
            _ => None,
        }
    }

    /// Query parameters for `symbol`, excluding authentication.
    pub(crate) fn params(self, symbol: &str, datatype: DataType) -> Vec<(&'static str, String)> {
        let mut out = vec![
            ("function", self.discriminator().to_string()),
            ("symbol", symbol.to_string()),
        ];
        match self {
            SeriesFunction::Intraday {
                interval,
                adjusted,
                output_size,
            } => {
                out.push(("interval", interval.to_string()));
                out.push(("adjusted", adjusted.to_string()));
                out.push(("outputsize", output_size.to_string()));
            }
            SeriesFunction::Daily { output_size } => {
                out.push(("outputsize", output_size.to_string()));
            }
            SeriesFunction::Weekly | SeriesFunction::Monthly => {}
        }
        out.push(("datatype", datatype.to_string()));
        out
    }
}
