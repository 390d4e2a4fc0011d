//! Raw column metadata as delivered by a catalog query.
//!
//! For a typed view, use `Column` which resolves the type number.

/// Raw column metadata.
#[derive(Debug, Clone)]
pub struct ColumnMetadata {
    /// Column name.
    pub name: String,
    /// 1-based position in the table.
    pub position: u32,
    /// Oracle data type number.
    pub oracle_type: u8,
    /// Numeric precision.
    pub precision: i8,
    /// Numeric scale.
    pub scale: i8,
    /// Maximum size in bytes.
    pub max_size: u32,
    /// Whether NULL values are allowed.
    pub nullable: bool,
    /// Whether values come from an identity or default sequence.
    pub identity: bool,
}

impl ColumnMetadata {
    /// Create new column metadata with minimal info.
    pub fn new(name: impl Into<String>, position: u32, oracle_type: u8) -> Self {
        Self {
            name: name.into(),
            position,
            oracle_type,
            precision: 0,
            scale: 0,
            max_size: 0,
            nullable: true,
            identity: false,
        }
    }
}
