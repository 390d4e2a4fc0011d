//! Resolved catalog column.
//!
//! A `Column` is an attribute whose type has been resolved to an
//! [`OracleType`]. It is a read-only copy source for
//! [`AttributeDescriptor`](super::AttributeDescriptor).

use crate::error::Result;

use super::metadata::ColumnMetadata;
use super::oracle_type::OracleType;
use super::traits::{AttributeBase, Named, Typed, TypedObject};

/// A table column with a resolved data type.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub position: u32,
    pub nullable: bool,
    pub identity: bool,
    pub data_type: OracleType,
}

impl Column {
    /// Create a column from metadata.
    ///
    /// Returns error if the Oracle type is not supported.
    pub fn from_metadata(meta: &ColumnMetadata) -> Result<Self> {
        Ok(Self {
            name: meta.name.clone(),
            position: meta.position,
            nullable: meta.nullable,
            identity: meta.identity,
            data_type: OracleType::from_raw(
                meta.oracle_type,
                meta.precision,
                meta.scale,
                meta.max_size,
            )?,
        })
    }
}

impl Named for Column {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Typed for Column {
    fn type_name(&self) -> &str {
        self.data_type.name()
    }

    fn type_id(&self) -> i32 {
        self.data_type.type_id()
    }
}

impl AttributeBase for Column {
    fn ordinal_position(&self) -> u32 {
        self.position
    }

    fn max_length(&self) -> Option<u64> {
        self.data_type.max_length()
    }

    fn scale(&self) -> Option<i32> {
        self.data_type.scale().and_then(|s| i32::try_from(s).ok())
    }

    fn precision(&self) -> Option<i32> {
        self.data_type.precision().and_then(|p| i32::try_from(p).ok())
    }

    fn is_required(&self) -> bool {
        !self.nullable
    }

    fn is_auto_generated(&self) -> bool {
        self.identity
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ORA_TYPE_NUM_NUMBER, ORA_TYPE_NUM_VARCHAR};
    use crate::error::Error;
    use crate::types::AttributeDescriptor;

    fn make_test_metadata() -> Vec<ColumnMetadata> {
        vec![
            ColumnMetadata {
                precision: 10,
                scale: 0,
                max_size: 22,
                nullable: false,
                identity: true,
                ..ColumnMetadata::new("ID", 1, ORA_TYPE_NUM_NUMBER as u8)
            },
            ColumnMetadata {
                max_size: 100,
                ..ColumnMetadata::new("NAME", 2, ORA_TYPE_NUM_VARCHAR as u8)
            },
        ]
    }

    #[test]
    fn test_column_from_metadata() {
        let meta = &make_test_metadata()[0];
        let col = Column::from_metadata(meta).unwrap();

        assert_eq!(col.name, "ID");
        assert!(!col.nullable);
        assert_eq!(
            col.data_type,
            OracleType::Number {
                precision: 10,
                scale: 0
            }
        );
    }

    #[test]
    fn test_unsupported_type() {
        let meta = ColumnMetadata::new("X", 1, 250);
        assert!(matches!(
            Column::from_metadata(&meta),
            Err(Error::UnsupportedType { type_num: 250 })
        ));
    }

    #[test]
    fn test_attribute_from_column() {
        let columns: Vec<Column> = make_test_metadata()
            .iter()
            .map(Column::from_metadata)
            .collect::<Result<_>>()
            .unwrap();

        let id = AttributeDescriptor::from_source(&columns[0]);
        assert_eq!(id.name(), "ID");
        assert_eq!(id.type_name(), "NUMBER");
        assert_eq!(id.type_id(), ORA_TYPE_NUM_NUMBER as i32);
        assert_eq!(id.ordinal_position(), 1);
        assert_eq!(id.precision(), Some(10));
        assert_eq!(id.scale(), Some(0));
        assert!(id.is_required());
        assert!(id.is_auto_generated());

        let name = AttributeDescriptor::from_source(&columns[1]);
        assert_eq!(name.full_type_name(), "VARCHAR2(100)");
        assert!(!name.is_required());
    }
}
