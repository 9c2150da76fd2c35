use super::function::SeriesFunction;
use super::model::TimeSeries;
use super::normalize::{series_meta, series_table};
use super::params::{DataType, Interval, OutputSize, SortOrder};
use crate::core::{AvClient, AvError, net};

impl AvClient {
    /// Intraday bars (`TIME_SERIES_INTRADAY`). Defaults: 5min, adjusted, compact, json.
    pub fn intraday(&self, symbol: impl Into<String>) -> IntradayBuilder<'_> {
        IntradayBuilder::new(self, symbol)
    }

    /// Daily bars (`TIME_SERIES_DAILY`). Defaults: compact, json.
    pub fn daily(&self, symbol: impl Into<String>) -> DailyBuilder<'_> {
        DailyBuilder::new(self, symbol)
    }

    /// Weekly bars (`TIME_SERIES_WEEKLY`).
    pub fn weekly(&self, symbol: impl Into<String>) -> PeriodicBuilder<'_> {
        PeriodicBuilder::new(self, symbol, SeriesFunction::Weekly)
    }

    /// Monthly bars (`TIME_SERIES_MONTHLY`).
    pub fn monthly(&self, symbol: impl Into<String>) -> PeriodicBuilder<'_> {
        PeriodicBuilder::new(self, symbol, SeriesFunction::Monthly)
    }
}

/// Everything one series call needs, independent of endpoint.
struct SeriesQuery<'a> {
    client: &'a AvClient,
    symbol: String,
    function: SeriesFunction,
    datatype: DataType,
    sort: SortOrder,
}

impl SeriesQuery<'_> {
    async fn fetch(self) -> Result<TimeSeries, AvError> {
        if self.symbol.trim().is_empty() {
            return Err(AvError::Config("symbol must not be empty".into()));
        }

        let params = self.function.params(&self.symbol, self.datatype);
        let raw = net::execute(self.client, &params).await?;

        let key = self.function.series_key();
        let series = raw
            .body
            .get(&*key)
            .ok_or_else(|| AvError::DataNotFound {
                symbol: self.symbol.clone(),
                interval: self.function.interval(),
            })?;

        let mut table = series_table(series)?;
        table.sort(self.sort);

        Ok(TimeSeries {
            meta: series_meta(&raw.body),
            table,
            notice: raw.notice,
        })
    }
}

/// Request builder for intraday bars.
pub struct IntradayBuilder<'a> {
    client: &'a AvClient,
    symbol: String,
    interval: Interval,
    adjusted: bool,
    output_size: OutputSize,
    datatype: DataType,
    sort: SortOrder,
}

impl<'a> IntradayBuilder<'a> {
    /// Create a request for `symbol` with provider defaults.
    pub fn new(client: &'a AvClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            interval: Interval::default(),
            adjusted: true,
            output_size: OutputSize::default(),
            datatype: DataType::default(),
            sort: SortOrder::default(),
        }
    }

    /// Bar interval. Also selects which series key is read.
    #[must_use]
    pub fn interval(mut self, interval: Interval) -> Self {
        self.interval = interval;
        self
    }

    /// Split/dividend adjusted bars (provider default) or raw as-traded bars.
    #[must_use]
    pub fn adjusted(mut self, yes: bool) -> Self {
        self.adjusted = yes;
        self
    }

    /// Latest 100 points (`Compact`) or full history (`Full`).
    #[must_use]
    pub fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// Response encoding to request.
    #[must_use]
    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatype = datatype;
        self
    }

    /// Row order of the returned table. Default: provider order.
    #[must_use]
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    /// Send the request and normalize the series.
    ///
    /// # Errors
    ///
    /// Any [`AvError`] kind; `DataNotFound` names the symbol and interval.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol, interval = %self.interval)))]
    pub async fn fetch(self) -> Result<TimeSeries, AvError> {
        SeriesQuery {
            client: self.client,
            symbol: self.symbol,
            function: SeriesFunction::Intraday {
                interval: self.interval,
                adjusted: self.adjusted,
                output_size: self.output_size,
            },
            datatype: self.datatype,
            sort: self.sort,
        }
        .fetch()
        .await
    }
}

/// Request builder for daily bars.
pub struct DailyBuilder<'a> {
    client: &'a AvClient,
    symbol: String,
    output_size: OutputSize,
    datatype: DataType,
    sort: SortOrder,
}

impl<'a> DailyBuilder<'a> {
    /// Create a request for `symbol` with provider defaults.
    pub fn new(client: &'a AvClient, symbol: impl Into<String>) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            output_size: OutputSize::default(),
            datatype: DataType::default(),
            sort: SortOrder::default(),
        }
    }

    /// Latest 100 points (`Compact`) or full history (`Full`).
    #[must_use]
    pub fn output_size(mut self, size: OutputSize) -> Self {
        self.output_size = size;
        self
    }

    /// Response encoding to request.
    #[must_use]
    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatype = datatype;
        self
    }

    /// Row order of the returned table. Default: provider order.
    #[must_use]
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    /// Send the request and normalize the series.
    ///
    /// # Errors
    ///
    /// Any [`AvError`] kind.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol)))]
    pub async fn fetch(self) -> Result<TimeSeries, AvError> {
        SeriesQuery {
            client: self.client,
            symbol: self.symbol,
            function: SeriesFunction::Daily {
                output_size: self.output_size,
            },
            datatype: self.datatype,
            sort: self.sort,
        }
        .fetch()
        .await
    }
}

/// Request builder for weekly or monthly bars, which only take a data type.
pub struct PeriodicBuilder<'a> {
    client: &'a AvClient,
    symbol: String,
    function: SeriesFunction,
    datatype: DataType,
    sort: SortOrder,
}

impl<'a> PeriodicBuilder<'a> {
    fn new(client: &'a AvClient, symbol: impl Into<String>, function: SeriesFunction) -> Self {
        Self {
            client,
            symbol: symbol.into(),
            function,
            datatype: DataType::default(),
            sort: SortOrder::default(),
        }
    }

    /// Response encoding to request.
    #[must_use]
    pub fn datatype(mut self, datatype: DataType) -> Self {
        self.datatype = datatype;
        self
    }

    /// Row order of the returned table. Default: provider order.
    #[must_use]
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort = order;
        self
    }

    /// Send the request and normalize the series.
    ///
    /// # Errors
    ///
    /// Any [`AvError`] kind.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(symbol = %self.symbol, function = self.function.discriminator())))]
    pub async fn fetch(self) -> Result<TimeSeries, AvError> {
        SeriesQuery {
            client: self.client,
            symbol: self.symbol,
            function: self.function,
            datatype: self.datatype,
            sort: self.sort,
        }
        .fetch()
        .await
    }
}
