//! API key resolution and the shared credential cell.

use std::collections::BTreeMap;
use std::env;
use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use super::constants::{API_KEY_ENV, AUTH_PARAM};
use crate::core::AvError;

/// The API key, shared by every clone of a client.
///
/// Readers take a snapshot per request; a replacement is a single assignment
/// under the write lock, so in-flight requests keep the key they started with.
#[derive(Clone)]
pub(crate) struct Credentials {
    token: Arc<RwLock<String>>,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("token", &"***").finish()
    }
}

impl Credentials {
    /// Use `explicit` when non-empty, otherwise fall back to `ALPHA_VANTAGE_API_KEY`.
    pub(crate) fn resolve(explicit: Option<&str>) -> Result<Self, AvError> {
        Self::resolve_with(explicit, |name| env::var(name).ok())
    }

    fn resolve_with(
        explicit: Option<&str>,
        lookup: impl FnOnce(&str) -> Option<String>,
    ) -> Result<Self, AvError> {
        let token = explicit
            .filter(|k| !k.is_empty())
            .map(str::to_owned)
            .or_else(|| lookup(API_KEY_ENV).filter(|k| !k.is_empty()))
            .ok_or_else(|| {
                AvError::Config(format!(
                    "no API key available: pass one explicitly or set {API_KEY_ENV}"
                ))
            })?;

        Ok(Self {
            token: Arc::new(RwLock::new(token)),
        })
    }

    pub(crate) fn token(&self) -> String {
        self.token
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn replace(&self, token: impl Into<String>) -> Result<(), AvError> {
        let token = token.into();
        if token.is_empty() {
            return Err(AvError::Config("API key cannot be empty".into()));
        }
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = token;
        Ok(())
    }

    /// Parameters injected into every outbound request.
    pub(crate) fn auth_params(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([(AUTH_PARAM, self.token())])
    }
}
