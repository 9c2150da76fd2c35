use chrono::NaiveDateTime;
use chrono_tz::Tz;
use serde::Serialize;

use super::params::SortOrder;
use crate::core::ProviderNotice;

/// A normalized series together with what the provider said about it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    /// The `Meta Data` block, when the response carried one.
    pub meta: Option<SeriesMeta>,
    /// One row per timestamp.
    pub table: TimeSeriesTable,
    /// Advisory text (rate limit notes and the like) that accompanied the data.
    pub notice: Option<ProviderNotice>,
}

impl TimeSeries {
    /// Drop the metadata and notice, keeping only the table.
    pub fn into_table(self) -> TimeSeriesTable {
        self.table
    }
}

/// Descriptive fields from the response's `Meta Data` block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SeriesMeta {
    /// Provider description of the series.
    pub information: Option<String>,
    /// Symbol as echoed by the provider.
    pub symbol: Option<String>,
    /// Timestamp of the latest data point, as sent.
    pub last_refreshed: Option<String>,
    /// Bar interval (intraday only).
    pub interval: Option<String>,
    /// `Compact` or `Full Size`, as sent (intraday and daily only).
    pub output_size: Option<String>,
    /// IANA zone name the timestamps are expressed in, e.g. `US/Eastern`.
    pub time_zone: Option<String>,
}

impl SeriesMeta {
    /// `time_zone` as a `chrono_tz` zone, if recognized.
    pub fn tz(&self) -> Option<Tz> {
        self.time_zone.as_deref()?.parse().ok()
    }
}

/// Time-indexed numeric table.
///
/// Columns come from the provider's field names with their ordinal prefix
/// removed (`"1. open"` becomes `"open"`). Every cell is an `f64`; a row that
/// lacked a field holds `NaN` in that column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimeSeriesTable {
    columns: Vec<String>,
    index: Vec<NaiveDateTime>,
    values: Vec<Vec<f64>>,
}

/// A borrowed view of one table row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    /// The row's index value.
    pub timestamp: NaiveDateTime,
    columns: &'a [String],
    values: &'a [f64],
}

impl Row<'_> {
    /// Value of `column` in this row, if the column exists.
    pub fn get(&self, column: &str) -> Option<f64> {
        let i = self.columns.iter().position(|c| c == column)?;
        self.values.get(i).copied()
    }

    /// All values, in column order.
    pub fn values(&self) -> &[f64] {
        self.values
    }
}

impl TimeSeriesTable {
    pub(crate) fn with_columns(columns: Vec<String>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    /// Append a row; `values` is padded with `NaN` up to the column count.
    pub(crate) fn push_row(&mut self, timestamp: NaiveDateTime, mut values: Vec<f64>) {
        values.resize(self.columns.len(), f64::NAN);
        self.index.push(timestamp);
        self.values.push(values);
    }

    /// Register a column if unseen and return its position. Existing rows get `NaN`.
    pub(crate) fn column_position(&mut self, name: &str) -> usize {
        if let Some(i) = self.columns.iter().position(|c| c == name) {
            return i;
        }
        self.columns.push(name.to_string());
        for row in &mut self.values {
            row.push(f64::NAN);
        }
        self.columns.len() - 1
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Column names, in first-seen order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Row timestamps, in row order.
    pub fn index(&self) -> &[NaiveDateTime] {
        &self.index
    }

    /// All values of one column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let i = self.columns.iter().position(|c| c == name)?;
        Some(self.values.iter().map(|row| row[i]).collect())
    }

    /// A single cell, by row position and column name.
    pub fn value(&self, row: usize, column: &str) -> Option<f64> {
        self.row(row)?.get(column)
    }

    /// A view of the row at position `i`.
    pub fn row(&self, i: usize) -> Option<Row<'_>> {
        Some(Row {
            timestamp: *self.index.get(i)?,
            columns: &self.columns,
            values: self.values.get(i)?,
        })
    }

    /// Iterate over rows in table order.
    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.index.iter().zip(&self.values).map(|(ts, values)| Row {
            timestamp: *ts,
            columns: &self.columns,
            values,
        })
    }

    /// Reorder rows by timestamp. `SortOrder::Provider` leaves the table as is.
    /// The sort is stable, so duplicate timestamps keep their relative order.
    pub fn sort(&mut self, order: SortOrder) {
        let mut perm: Vec<usize> = (0..self.len()).collect();
        match order {
            SortOrder::Provider => return,
            SortOrder::Ascending => perm.sort_by_key(|&i| self.index[i]),
            SortOrder::Descending => perm.sort_by(|&a, &b| self.index[b].cmp(&self.index[a])),
        }
        self.index = perm.iter().map(|&i| self.index[i]).collect();
        let mut values = std::mem::take(&mut self.values);
        self.values = perm.iter().map(|&i| std::mem::take(&mut values[i])).collect();
    }

    /// Consuming form of [`sort`](Self::sort).
    #[must_use]
    pub fn sorted(mut self, order: SortOrder) -> Self {
        self.sort(order);
        self
    }
}
