//! Coarse data type categories.

use serde::{Deserialize, Serialize};

/// Coarse category of a database type.
///
/// Reconciliation only resets an attribute's modifiers when the kind of its
/// type changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataKind {
    Boolean,
    Numeric,
    String,
    Datetime,
    Binary,
    /// Large objects (CLOB, BLOB, ...).
    Content,
    Struct,
    Document,
    Array,
    Object,
    Reference,
    Rowid,
    Any,
    Unknown,
}

impl DataKind {
    /// Whether values are measured in characters or bytes with a declared
    /// capacity that should not be inherited blindly.
    pub fn is_sized_text_or_content(self) -> bool {
        matches!(self, DataKind::String | DataKind::Content)
    }
}
