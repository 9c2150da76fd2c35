use thiserror::Error;

use crate::series::Interval;

/// The primary error type for all fallible operations in this crate.
///
/// Every call yields either a result or exactly one of these kinds; nothing is
/// recovered or downgraded inside the client.
#[derive(Debug, Error)]
pub enum AvError {
    /// Missing or empty API key, or an invalid client/request configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// The request never produced a usable JSON body.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The provider answered with a well-formed error payload.
    #[error("API error: {0}")]
    Provider(String),

    /// The response carried no series under the key expected for this request.
    #[error("no time series data found for {symbol}{}", interval_suffix(.interval))]
    DataNotFound {
        /// The requested symbol.
        symbol: String,
        /// The requested bar interval (intraday only).
        interval: Option<Interval>,
    },

    /// A timestamp, field name or value inside the series could not be parsed.
    #[error("data format error: {0}")]
    DataFormat(String),
}

/// Failures below the provider's own error reporting.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection, timeout or body read failure. The URL is stripped before
    /// the error is stored.
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The requested URL, with the API key redacted.
        url: String,
    },

    /// The body was not a JSON object.
    #[error("malformed response body: {0}")]
    MalformedBody(#[source] serde_json::Error),
}

impl AvError {
    /// True for network, HTTP status and body decoding failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, AvError::Transport(_))
    }

    /// True when the request was cut off by a configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, AvError::Transport(TransportError::Http(e)) if e.is_timeout())
    }
}

impl From<reqwest::Error> for AvError {
    // the request URL carries the API key
    fn from(e: reqwest::Error) -> Self {
        AvError::Transport(TransportError::Http(e.without_url()))
    }
}

impl From<url::ParseError> for AvError {
    fn from(e: url::ParseError) -> Self {
        AvError::Config(format!("invalid URL: {e}"))
    }
}

fn interval_suffix(interval: &Option<Interval>) -> String {
    interval
        .map(|i| format!(" with interval {i}"))
        .unwrap_or_default()
}
