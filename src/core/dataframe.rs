use polars::prelude::*;

use crate::series::TimeSeriesTable;

/// Conversion of normalized data into a Polars `DataFrame`.
pub trait ToDataFrame {
    /// Converts the object into a Polars DataFrame.
    fn to_dataframe(&self) -> PolarsResult<DataFrame>;
}

impl ToDataFrame for TimeSeriesTable {
    /// A `timestamp` column (`Datetime(ms)`, naive) followed by one `f64` column
    /// per series field, rows in the table's current order.
    fn to_dataframe(&self) -> PolarsResult<DataFrame> {
        let millis: Vec<i64> = self
            .index()
            .iter()
            .map(|t| t.and_utc().timestamp_millis())
            .collect();

        let mut columns: Vec<Column> = Vec::with_capacity(self.columns().len() + 1);
        columns.push(
            Series::new("timestamp".into(), millis)
                .cast(&DataType::Datetime(TimeUnit::Milliseconds, None))?
                .into(),
        );
        for name in self.columns() {
            let values = self.column(name).unwrap_or_default();
            columns.push(Column::new(name.as_str().into(), values));
        }

        DataFrame::new(columns)
    }
}
