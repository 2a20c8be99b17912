//! URL record entity: the single persisted mapping from alias to URL.

/// A stored alias-to-URL mapping.
///
/// Records are append-only: once created, neither the alias nor the URL changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String) -> Self {
        Self { id, alias, url }
    }
}
