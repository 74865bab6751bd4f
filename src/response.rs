//! Translation of backend response bodies.
//!
//! The backend wraps stored records in envelope fields (`_source`,
//! `hits.hits`, the delete acknowledgment flag). These helpers unwrap
//! them; they are pure so every translation rule is testable without a
//! running backend.

use serde_json::Value;

/// Extracts the stored record from a `{"_source": ...}` envelope.
///
/// Returns `None` when the field is absent. Absent data is not an
/// error; the caller reports it as an empty result.
pub fn source(body: &Value) -> Option<Value> {
    body.get("_source").cloned()
}

/// Extracts the `_source` of every entry in `hits.hits`, preserving the
/// backend's hit order.
///
/// A missing or malformed `hits.hits` yields an empty list. Entries
/// without a `_source` field are skipped.
pub fn hit_sources(body: &Value) -> Vec<Value> {
    body.get("hits")
        .and_then(|hits| hits.get("hits"))
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|entry| entry.get("_source").cloned())
                .collect()
        })
        .unwrap_or_default()
}

/// Reads the delete acknowledgment flag.
///
/// Only the JSON boolean `true` counts as acknowledged. `1`, `"true"`,
/// `false` and an absent field all read as not acknowledged.
pub fn acknowledged(body: &Value) -> bool {
    matches!(body.get("ok"), Some(Value::Bool(true)))
}
