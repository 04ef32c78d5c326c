//! Request parameters and per-request transport configuration.
//!
//! Responsibilities:
//! - Hold query-string parameters for a single request.
//! - Hold transport overrides (timeout, headers, credentials, accepted status codes).
//! - Merge overrides without discarding values the caller already set.
//!
//! Does NOT handle:
//! - Applying the values to an HTTP request (see `endpoints::request`).

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use secrecy::SecretString;

/// Credentials sent as an HTTP basic `Authorization` header.
#[derive(Debug, Clone)]
pub struct BasicAuth {
    pub username: String,
    pub password: SecretString,
}

/// Transport-level overrides for a single request.
#[derive(Debug, Clone, Default)]
pub struct RequestConfiguration {
    /// Overall request timeout; the client default applies when unset
    pub request_timeout: Option<Duration>,
    /// Extra HTTP headers
    pub headers: BTreeMap<String, String>,
    /// Basic auth credentials
    pub basic_auth: Option<BasicAuth>,
    /// Non-2xx status codes that should be returned instead of raised
    pub allowed_status_codes: BTreeSet<u16>,
    /// Value sent as `X-Opaque-Id` so the request can be traced in cluster logs
    pub opaque_id: Option<String>,
}

impl RequestConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_basic_auth(mut self, username: impl Into<String>, password: SecretString) -> Self {
        self.basic_auth = Some(BasicAuth {
            username: username.into(),
            password,
        });
        self
    }

    pub fn with_allowed_status(mut self, status: u16) -> Self {
        self.allowed_status_codes.insert(status);
        self
    }

    pub fn with_opaque_id(mut self, id: impl Into<String>) -> Self {
        self.opaque_id = Some(id.into());
        self
    }

    /// Layer `overrides` on top of this configuration.
    ///
    /// Fields unset in `overrides` keep their current value. Headers and
    /// allowed status codes are unioned, with `overrides` winning per header.
    pub fn merge(&mut self, overrides: &RequestConfiguration) {
        if let Some(timeout) = overrides.request_timeout {
            self.request_timeout = Some(timeout);
        }
        if let Some(auth) = &overrides.basic_auth {
            self.basic_auth = Some(auth.clone());
        }
        if let Some(id) = &overrides.opaque_id {
            self.opaque_id = Some(id.clone());
        }
        self.headers.extend(
            overrides
                .headers
                .iter()
                .map(|(name, value)| (name.clone(), value.clone())),
        );
        self.allowed_status_codes
            .extend(overrides.allowed_status_codes.iter().copied());
    }

    /// Whether a response with `status` should be handed back to the caller.
    pub fn allows_status(&self, status: u16) -> bool {
        (200..300).contains(&status) || self.allowed_status_codes.contains(&status)
    }
}

/// Query-string parameters plus optional transport configuration.
#[derive(Debug, Clone, Default)]
pub struct RequestParameters {
    query: BTreeMap<String, String>,
    configuration: Option<RequestConfiguration>,
}

impl RequestParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a query parameter, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        self.query.insert(key.into(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }

    /// Query parameters in key order.
    pub fn query_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.query.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.query.is_empty() && self.configuration.is_none()
    }

    pub fn configuration(&self) -> Option<&RequestConfiguration> {
        self.configuration.as_ref()
    }

    /// Augment the transport configuration with `f`.
    ///
    /// `f` receives the current configuration (or an empty one) and returns
    /// the configuration to keep. Query parameters are untouched.
    pub fn request_configuration<F>(mut self, f: F) -> Self
    where
        F: FnOnce(RequestConfiguration) -> RequestConfiguration,
    {
        let current = self.configuration.take().unwrap_or_default();
        self.configuration = Some(f(current));
        self
    }
}
