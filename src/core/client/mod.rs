//! Public client surface + builder.
//! Internals are split into `auth` (API key cell) and `constants` (endpoint + UA).

mod auth;
mod constants;

pub use constants::{API_KEY_ENV, AUTH_PARAM};

use crate::core::AvError;
use auth::Credentials;
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::Duration;
use url::Url;

/// Handle to the Alpha Vantage query API.
///
/// Cloning is cheap; clones share the HTTP connection pool and the API key, so
/// [`AvClient::set_api_key`] on one clone is seen by all of them.
///
/// # Example
///
/// ```no_run
/// # use alphavantage_rs::{AvClient, Interval};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = AvClient::new(None)?; // reads ALPHA_VANTAGE_API_KEY
/// let bars = client.intraday("IBM").interval(Interval::Min15).fetch().await?;
/// println!("{} bars, columns {:?}", bars.table.len(), bars.table.columns());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AvClient {
    http: Client,
    base_url: Url,
    credentials: Credentials,
}

impl AvClient {
    /// Build a client with default settings.
    ///
    /// `api_key` is used when given and non-empty; otherwise the key is read from
    /// the `ALPHA_VANTAGE_API_KEY` environment variable.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Config`] when neither source yields a key.
    pub fn new(api_key: Option<&str>) -> Result<Self, AvError> {
        let mut builder = Self::builder();
        if let Some(key) = api_key {
            builder = builder.api_key(key);
        }
        builder.build()
    }

    /// Create a new builder.
    pub fn builder() -> AvClientBuilder {
        AvClientBuilder::default()
    }

    /// The API key currently in use.
    pub fn api_key(&self) -> String {
        self.credentials.token()
    }

    /// Replace the API key for this client and all of its clones.
    ///
    /// # Errors
    ///
    /// Returns [`AvError::Config`] if `key` is empty; the previous key stays in place.
    pub fn set_api_key(&self, key: impl Into<String>) -> Result<(), AvError> {
        self.credentials.replace(key)
    }

    /// The authentication parameters injected into every request.
    pub fn auth_params(&self) -> BTreeMap<&'static str, String> {
        self.credentials.auth_params()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_url(&self) -> &Url {
        &self.base_url
    }
}

/* ----------------------- Builder ----------------------- */

/// Configures and builds an [`AvClient`].
#[derive(Default)]
pub struct AvClientBuilder {
    api_key: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl AvClientBuilder {
    /// Use this API key instead of `ALPHA_VANTAGE_API_KEY`.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Override the query endpoint (e.g., a mock server or a proxy).
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the User-Agent.
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    pub fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    pub fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Resolve the API key and build the client.
    ///
    /// # Errors
    ///
    /// [`AvError::Config`] when no key is available, or
    /// [`AvError::Transport`] if the HTTP client cannot be initialized.
    pub fn build(self) -> Result<AvClient, AvError> {
        let credentials = Credentials::resolve(self.api_key.as_deref())?;
        let base_url = match self.base_url {
            Some(url) => url,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let mut httpb = reqwest::Client::builder()
            .user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(AvClient {
            http,
            base_url,
            credentials,
        })
    }
}
