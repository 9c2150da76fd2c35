use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::AvError;

/// Bar spacing for intraday series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interval {
    /// One-minute bars.
    #[serde(rename = "1min")]
    Min1,
    /// Five-minute bars (default).
    #[default]
    #[serde(rename = "5min")]
    Min5,
    /// Fifteen-minute bars.
    #[serde(rename = "15min")]
    Min15,
    /// Thirty-minute bars.
    #[serde(rename = "30min")]
    Min30,
    /// Hourly bars.
    #[serde(rename = "60min")]
    Min60,
}

impl Interval {
    /// Every supported interval, shortest first.
    pub const ALL: [Interval; 5] = [
        Interval::Min1,
        Interval::Min5,
        Interval::Min15,
        Interval::Min30,
        Interval::Min60,
    ];

    /// The value sent as `interval` and used in the series key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Interval::Min1 => "1min",
            Interval::Min5 => "5min",
            Interval::Min15 => "15min",
            Interval::Min30 => "30min",
            Interval::Min60 => "60min",
        }
    }
}

/// How much history to return: the latest 100 points, or the full record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSize {
    /// The latest 100 data points (default).
    #[default]
    Compact,
    /// The full available history.
    Full,
}

impl OutputSize {
    /// The value sent as `outputsize`.
    pub const fn as_str(self) -> &'static str {
        match self {
            OutputSize::Compact => "compact",
            OutputSize::Full => "full",
        }
    }
}

/// Response encoding requested from the provider.
///
/// Only `Json` can be normalized; a `Csv` body fails with
/// [`TransportError::MalformedBody`](crate::TransportError::MalformedBody).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// JSON body (default); the only format that can be normalized.
    #[default]
    Json,
    /// CSV body.
    Csv,
}

impl DataType {
    /// The value sent as `datatype`.
    pub const fn as_str(self) -> &'static str {
        match self {
            DataType::Json => "json",
            DataType::Csv => "csv",
        }
    }
}

/// Row order of a returned table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Whatever order the provider's JSON object lists timestamps in
    /// (newest first, in practice).
    #[default]
    Provider,
    /// Oldest first.
    Ascending,
    /// Newest first.
    Descending,
}

macro_rules! wire_str {
    ($ty:ident, $what:literal, [$($v:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = AvError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($ty::$v.as_str()) {
                        return Ok($ty::$v);
                    }
                )+
                Err(AvError::Config(format!(concat!("unknown ", $what, ": {}"), s)))
            }
        }
    };
}

wire_str!(Interval, "interval", [Min1, Min5, Min15, Min30, Min60]);
wire_str!(OutputSize, "output size", [Compact, Full]);
wire_str!(DataType, "data type", [Json, Csv]);
