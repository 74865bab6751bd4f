//! Elasticsearch implementation of the provider contract.

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::config::AdapterConfig;
use crate::error::{AdapterError, AdapterResult};
use crate::path::resource_path;
use crate::provider::DocumentStore;
use crate::response;

/// Adapter mapping the four-operation document-store contract onto an
/// Elasticsearch REST backend.
///
/// Holds only an immutable configuration and an HTTP client, so clones
/// are cheap and concurrent calls are independent. Each operation
/// performs exactly one outbound request; no state is mutated, nothing
/// is retried, and the transport's own timeout defaults are left
/// untouched.
#[derive(Debug, Clone)]
pub struct ElasticsearchAdapter {
    config: AdapterConfig,
    client: Client,
}

impl ElasticsearchAdapter {
    /// Category tag, readable on the type.
    pub const API: &'static str = crate::provider::API;

    /// Provider name, readable on the type.
    pub const PROVIDER: &'static str = "elasticsearch";

    /// Creates an adapter with the default configuration.
    pub fn new() -> Self {
        Self::with_config(AdapterConfig::default())
    }

    /// Creates an adapter from the given configuration.
    pub fn with_config(config: AdapterConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Returns the adapter configuration.
    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    /// Builds the resource path for the given segments.
    ///
    /// See [`resource_path`]: the configured address and every argument
    /// are lowercased independently and joined with `/`.
    pub fn path(&self, database: &str, doc_type: &str, id: &str) -> String {
        resource_path(&self.config.address, database, doc_type, id)
    }

    /// Issues a load and discards the outcome (fire-and-forget).
    ///
    /// Failures are logged at debug level and otherwise silently
    /// dropped. Must be called within a tokio runtime.
    pub fn dispatch_load(&self, database: &str, doc_type: &str, id: &str) {
        let adapter = self.clone();
        let (database, doc_type, id) = owned3(database, doc_type, id);
        spawn_detached("load", async move {
            adapter.load(&database, &doc_type, &id).await.map(|_| ())
        });
    }

    /// Issues a find and discards the outcome (fire-and-forget).
    ///
    /// Failures are logged at debug level and otherwise silently
    /// dropped. Must be called within a tokio runtime.
    pub fn dispatch_find(&self, database: &str, doc_type: &str, query: &Value) {
        let adapter = self.clone();
        let (database, doc_type) = (database.to_owned(), doc_type.to_owned());
        let query = query.clone();
        spawn_detached("find", async move {
            adapter.find(&database, &doc_type, &query).await.map(|_| ())
        });
    }

    /// Issues a save and discards the outcome (fire-and-forget).
    ///
    /// Failures are logged at debug level and otherwise silently
    /// dropped. Must be called within a tokio runtime.
    pub fn dispatch_save(&self, database: &str, doc_type: &str, id: &str, content: &Value) {
        let adapter = self.clone();
        let (database, doc_type, id) = owned3(database, doc_type, id);
        let content = content.clone();
        spawn_detached("save", async move {
            adapter
                .save(&database, &doc_type, &id, &content)
                .await
                .map(|_| ())
        });
    }

    /// Issues a delete and discards the outcome (fire-and-forget).
    ///
    /// Failures are logged at debug level and otherwise silently
    /// dropped. Must be called within a tokio runtime.
    pub fn dispatch_delete(&self, database: &str, doc_type: &str, id: &str) {
        let adapter = self.clone();
        let (database, doc_type, id) = owned3(database, doc_type, id);
        spawn_detached("delete", async move {
            adapter.delete(&database, &doc_type, &id).await.map(|_| ())
        });
    }

    /// Translates a response into its JSON body.
    ///
    /// Non-success statuses become [`AdapterError::Backend`] carrying
    /// the backend's raw error payload; when the body cannot be read,
    /// the status line stands in.
    async fn read_body(res: Response) -> AdapterResult<Value> {
        let status = res.status();
        if status.is_success() {
            Ok(res.json().await?)
        } else {
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());
            Err(AdapterError::Backend {
                status: status.as_u16(),
                body,
            })
        }
    }
}

impl Default for ElasticsearchAdapter {
    fn default() -> Self {
        Self::new()
    }
}

fn owned3(a: &str, b: &str, c: &str) -> (String, String, String) {
    (a.to_owned(), b.to_owned(), c.to_owned())
}

/// Spawns a detached operation, logging its failure at debug level.
fn spawn_detached<F>(op: &'static str, fut: F)
where
    F: Future<Output = AdapterResult<()>> + Send + 'static,
{
    tokio::spawn(async move {
        if let Err(err) = fut.await {
            debug!(op, %err, "detached operation failed");
        }
    });
}

#[async_trait]
impl DocumentStore for ElasticsearchAdapter {
    fn provider(&self) -> &'static str {
        Self::PROVIDER
    }

    async fn load(
        &self,
        database: &str,
        doc_type: &str,
        id: &str,
    ) -> AdapterResult<Option<Value>> {
        let path = self.path(database, doc_type, id);
        debug!(op = "load", %path);
        let res = self
            .client
            .get(&path)
            .header(ACCEPT, self.config.accept.as_str())
            .send()
            .await?;
        let body = Self::read_body(res).await?;
        Ok(response::source(&body))
    }

    async fn find(
        &self,
        database: &str,
        doc_type: &str,
        query: &Value,
    ) -> AdapterResult<Vec<Value>> {
        let path = self.path(database, doc_type, "_search");
        debug!(op = "find", %path);
        let res = self
            .client
            .get(&path)
            .header(ACCEPT, self.config.accept.as_str())
            .json(query)
            .send()
            .await?;
        let body = Self::read_body(res).await?;
        Ok(response::hit_sources(&body))
    }

    async fn save(
        &self,
        database: &str,
        doc_type: &str,
        id: &str,
        content: &Value,
    ) -> AdapterResult<Option<Value>> {
        let path = self.path(database, doc_type, id);
        debug!(op = "save", %path);
        let res = self
            .client
            .post(&path)
            .header(ACCEPT, self.config.accept.as_str())
            .json(content)
            .send()
            .await?;
        let body = Self::read_body(res).await?;
        Ok(response::source(&body))
    }

    async fn delete(&self, database: &str, doc_type: &str, id: &str) -> AdapterResult<bool> {
        let path = self.path(database, doc_type, id);
        debug!(op = "delete", %path);
        let res = self
            .client
            .delete(&path)
            .header(ACCEPT, self.config.accept.as_str())
            .send()
            .await?;
        let body = Self::read_body(res).await?;
        Ok(response::acknowledged(&body))
    }
}
