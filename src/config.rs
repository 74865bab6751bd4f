//! Adapter configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the Elasticsearch adapter.
///
/// The effective configuration is the built-in default overridden
/// field-by-field by whatever the caller sets, either through the
/// builder methods or by deserializing a partial document (unset fields
/// fall back to their defaults). Immutable once the adapter is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Backend base URL (default: `"http://localhost:9200"`).
    #[serde(default = "default_address")]
    pub address: String,

    /// `Accept` header sent on every request (default: `"application/json"`).
    #[serde(default = "default_accept")]
    pub accept: String,
}

fn default_address() -> String {
    "http://localhost:9200".to_string()
}

fn default_accept() -> String {
    "application/json".to_string()
}

impl Default for AdapterConfig {
    fn default() -> Self {
        Self {
            address: default_address(),
            accept: default_accept(),
        }
    }
}

impl AdapterConfig {
    /// Creates a configuration with the given backend address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Default::default()
        }
    }

    /// Sets the `Accept` header value.
    pub fn with_accept(mut self, accept: impl Into<String>) -> Self {
        self.accept = accept.into();
        self
    }
}
