//! The document-store provider contract.
//!
//! This trait is the surface a host registry depends on: four
//! data-access operations plus a pair of capability tags used for
//! discovery. Any backend implementing it can be plugged in
//! interchangeably with the others.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::AdapterResult;

/// Category tag shared by every storage-provider component.
pub const API: &str = "adapter-provider";

/// Four-operation contract for pluggable document-store providers.
///
/// Every operation resolves exactly once with either an error or a
/// value. A transport failure or non-success backend status is the
/// error case; a success response that merely lacks data resolves with
/// an absent or empty result.
///
/// Concurrent invocations are independent: implementations hold no
/// shared mutable state and give no ordering guarantee between calls
/// issued concurrently.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Category tag marking this component as a storage provider.
    fn api(&self) -> &'static str {
        API
    }

    /// Name of the backend this provider drives.
    fn provider(&self) -> &'static str;

    /// Loads one document by identifier.
    ///
    /// Resolves with `None` when the backend response carries no
    /// document body.
    async fn load(
        &self,
        database: &str,
        doc_type: &str,
        id: &str,
    ) -> AdapterResult<Option<Value>>;

    /// Runs a search query and returns the matching documents in the
    /// backend's hit order.
    ///
    /// The query descriptor is forwarded verbatim; an answer without
    /// hits resolves with an empty list.
    async fn find(
        &self,
        database: &str,
        doc_type: &str,
        query: &Value,
    ) -> AdapterResult<Vec<Value>>;

    /// Stores a document under the given identifier.
    ///
    /// The content is passed through untouched. Resolves with the
    /// document body echoed by the backend, or `None` when the response
    /// carries none.
    async fn save(
        &self,
        database: &str,
        doc_type: &str,
        id: &str,
        content: &Value,
    ) -> AdapterResult<Option<Value>>;

    /// Deletes a document by identifier.
    ///
    /// Resolves with `true` only when the backend explicitly
    /// acknowledges the deletion; any other answer resolves with
    /// `false`.
    async fn delete(&self, database: &str, doc_type: &str, id: &str) -> AdapterResult<bool>;
}
