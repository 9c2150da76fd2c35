//! Reshaping a provider series object into a [`TimeSeriesTable`].

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};

use super::model::{SeriesMeta, TimeSeriesTable};
use crate::core::AvError;

const META_KEY: &str = "Meta Data";

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Build a table from `{timestamp: {"1. open": "..", ...}, ...}`.
///
/// Rows keep the object's iteration order, which is the provider's order.
pub(crate) fn series_table(series: &Value) -> Result<TimeSeriesTable, AvError> {
    let series = series
        .as_object()
        .ok_or_else(|| AvError::DataFormat("time series is not an object".into()))?;

    let mut table = TimeSeriesTable::default();
    for (stamp, fields) in series {
        let timestamp = parse_timestamp(stamp)?;
        let fields = fields.as_object().ok_or_else(|| {
            AvError::DataFormat(format!("entry for {stamp} is not an object"))
        })?;

        let mut row = vec![f64::NAN; table.columns().len()];
        let mut seen = HashSet::with_capacity(fields.len());
        for (raw_name, raw_value) in fields {
            let name = strip_ordinal(raw_name)?;
            if !seen.insert(name) {
                return Err(AvError::DataFormat(format!(
                    "duplicate field {name:?} at {stamp}"
                )));
            }
            let i = table.column_position(name);
            if i >= row.len() {
                row.resize(i + 1, f64::NAN);
            }
            row[i] = parse_value(stamp, raw_name, raw_value)?;
        }
        table.push_row(timestamp, row);
    }
    Ok(table)
}

/// `"1. open"` -> `"open"`: everything after the first `". "`.
///
/// A name without the separator is rejected rather than passed through.
pub(crate) fn strip_ordinal(name: &str) -> Result<&str, AvError> {
    name.split_once(". ")
        .map(|(_, rest)| rest)
        .ok_or_else(|| AvError::DataFormat(format!("unexpected field name {name:?}")))
}

/// Accepts `YYYY-MM-DD HH:MM:SS`, `YYYY-MM-DD HH:MM` and bare dates (midnight).
pub(crate) fn parse_timestamp(s: &str) -> Result<NaiveDateTime, AvError> {
    let s = s.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| AvError::DataFormat(format!("invalid timestamp {s:?}")))
}

fn parse_value(stamp: &str, field: &str, v: &Value) -> Result<f64, AvError> {
    let parsed = match v {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        AvError::DataFormat(format!("non-numeric value {v} for {field:?} at {stamp}"))
    })
}

/// Read the `Meta Data` block. Unknown or malformed entries are skipped.
pub(crate) fn series_meta(body: &Map<String, Value>) -> Option<SeriesMeta> {
    let block = body.get(META_KEY)?.as_object()?;
    let mut meta = SeriesMeta::default();
    for (raw_name, value) in block {
        let Some(value) = value.as_str().map(str::to_owned) else {
            continue;
        };
        let name = strip_ordinal(raw_name).unwrap_or(raw_name).to_ascii_lowercase();
        let slot = match name.as_str() {
            "information" => &mut meta.information,
            "symbol" => &mut meta.symbol,
            "last refreshed" => &mut meta.last_refreshed,
            "interval" => &mut meta.interval,
            "output size" => &mut meta.output_size,
            "time zone" => &mut meta.time_zone,
            _ => continue,
        };
        *slot = Some(value);
    }
    Some(meta)
}
