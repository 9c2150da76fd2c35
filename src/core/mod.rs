//! Core components of the `alphavantage-rs` client.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The main [`AvClient`] and its builder, which own the API key.
//! - The primary [`AvError`] type.
//! - The request transport and provider response classification.

/// The main client (`AvClient`), builder, and credential handling.
pub mod client;
/// The primary error type (`AvError`) for the crate.
pub mod error;
pub(crate) mod net;
pub(crate) mod wire;

/// Polars conversion for normalized tables.
#[cfg(feature = "dataframe")]
pub mod dataframe;

// convenient re-exports so most code can just `use crate::core::AvClient`
pub use client::{AvClient, AvClientBuilder};
pub use error::{AvError, TransportError};
pub use wire::ProviderNotice;
