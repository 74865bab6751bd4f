//! Elasticsearch document-store adapter.
//!
//! This crate maps four generic data-access operations (load, find,
//! save, delete) onto HTTP calls against an Elasticsearch REST backend,
//! so a higher-level storage-abstraction framework can plug the backend
//! in interchangeably with any other provider implementing the same
//! [`DocumentStore`] contract.
//!
//! Each operation builds a lowercased resource path, issues exactly one
//! request, and translates the response body into the caller's expected
//! shape. There is no pooling, retrying, caching, or schema management;
//! absent data is reported as an empty result rather than an error.
//!
//! # Quick start
//!
//! ```no_run
//! use docstore_elasticsearch::{AdapterConfig, DocumentStore, ElasticsearchAdapter};
//! use serde_json::json;
//!
//! # async fn example() -> docstore_elasticsearch::AdapterResult<()> {
//! let adapter = ElasticsearchAdapter::with_config(AdapterConfig::new("http://localhost:9200"));
//!
//! adapter.save("app", "widgets", "w-1", &json!({"label": "first"})).await?;
//!
//! let loaded = adapter.load("app", "widgets", "w-1").await?;
//! assert!(loaded.is_some());
//!
//! let matches = adapter
//!     .find("app", "widgets", &json!({"query": {"match_all": {}}}))
//!     .await?;
//! println!("{} widgets", matches.len());
//!
//! let gone = adapter.delete("app", "widgets", "w-1").await?;
//! assert!(gone);
//! # Ok(())
//! # }
//! ```
//!
//! # Discovery
//!
//! A host registry identifies providers by a pair of capability tags,
//! readable on the type and on instances:
//!
//! ```
//! use docstore_elasticsearch::{DocumentStore, ElasticsearchAdapter};
//!
//! assert_eq!(ElasticsearchAdapter::API, "adapter-provider");
//! assert_eq!(ElasticsearchAdapter::PROVIDER, "elasticsearch");
//!
//! let adapter = ElasticsearchAdapter::new();
//! assert_eq!(adapter.api(), "adapter-provider");
//! assert_eq!(adapter.provider(), "elasticsearch");
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adapter;
pub mod config;
pub mod error;
pub mod path;
pub mod provider;
pub mod response;

pub use adapter::ElasticsearchAdapter;
pub use config::AdapterConfig;
pub use error::{AdapterError, AdapterResult};
pub use provider::DocumentStore;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name.
pub const NAME: &str = env!("CARGO_PKG_NAME");
