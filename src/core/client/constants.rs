//! Centralized constants for the default endpoint, UA and auth wiring.

/// Identifies the crate to the provider.
pub(crate) const USER_AGENT: &str = concat!("alphavantage-rs/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint; every function is selected by query parameters.
pub(crate) const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Environment variable consulted when no API key is passed explicitly.
pub const API_KEY_ENV: &str = "ALPHA_VANTAGE_API_KEY";

/// Query parameter carrying the API key on every request.
pub const AUTH_PARAM: &str = "apikey";
