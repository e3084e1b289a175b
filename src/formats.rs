use serde::{Deserialize, Serialize};

/// One enriched library entry, as persisted in the collection file.
/// Records are append-only: once written they are never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Canonical identifier (digits and 'X' only).
    pub isbn: String,
    pub title: String,
    pub author: String,
    /// Derived shelf code, see [`crate::shelf::shelf_code`].
    pub cutter: String,
    /// Cover thumbnail URL, https-only; empty when the catalog has none.
    pub thumbnail: String,
    pub category: String,
}
