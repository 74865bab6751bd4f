//! Resource path construction.

/// Builds the backend resource path for an operation.
///
/// Joins `[address, database, type, identifier]` with `/`, lowercasing
/// every segment independently. Pure: identical arguments always yield
/// the identical path. No segment may be omitted; an empty identifier
/// keeps its slot and produces a trailing `/` (degenerate but accepted).
pub fn resource_path(address: &str, database: &str, doc_type: &str, id: &str) -> String {
    [address, database, doc_type, id]
        .iter()
        .map(|segment| segment.to_lowercase())
        .collect::<Vec<_>>()
        .join("/")
}
