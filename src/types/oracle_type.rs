//! Oracle data types as typed objects.
//!
//! Each variant carries its type-specific metadata (precision, scale,
//! max_size) and reports the data kind, length and numeric modifiers used by
//! type change reconciliation.

use crate::constants::{
    ORA_BINARY_INTEGER_SIZE, ORA_DATE_SIZE, ORA_MAX_LOB_LENGTH, ORA_MAX_LONG_LENGTH,
    ORA_NUMBER_MAX_SIZE, ORA_TYPE_NUM_BINARY_INTEGER, ORA_TYPE_NUM_BLOB, ORA_TYPE_NUM_CHAR,
    ORA_TYPE_NUM_CLOB, ORA_TYPE_NUM_DATE, ORA_TYPE_NUM_LONG, ORA_TYPE_NUM_NUMBER,
    ORA_TYPE_NUM_RAW, ORA_TYPE_NUM_VARCHAR,
};
use crate::error::{Error, Result};

use super::data_kind::DataKind;
use super::traits::{Typed, TypedObject};

/// Oracle data type with type-specific attributes.
#[derive(Debug, Clone, PartialEq)]
pub enum OracleType {
    /// VARCHAR2(max_size) - variable-length string.
    Varchar2 { max_size: u32 },
    /// NUMBER(precision, scale). Precision 0 means unconstrained.
    Number { precision: i8, scale: i8 },
    BinaryInteger,
    /// LONG - legacy large text type.
    Long,
    /// CHAR(size) - fixed-length string.
    Char { max_size: u32 },
    Date,
    Clob,
    Nclob,
    Blob,
    /// RAW(size) - variable-length binary.
    Raw { max_size: u32 },
}

impl OracleType {
    /// Base names of every supported type.
    pub const TYPE_NAMES: &'static [&'static str] = &[
        "VARCHAR2",
        "NUMBER",
        "BINARY_INTEGER",
        "LONG",
        "CHAR",
        "DATE",
        "CLOB",
        "NCLOB",
        "BLOB",
        "RAW",
    ];

    /// Create from raw Oracle type number and metadata.
    ///
    /// Returns `Err(Error::UnsupportedType)` for unsupported types.
    pub fn from_raw(oracle_type: u8, precision: i8, scale: i8, max_size: u32) -> Result<Self> {
        match oracle_type as u16 {
            ORA_TYPE_NUM_VARCHAR => Ok(OracleType::Varchar2 { max_size }),
            ORA_TYPE_NUM_NUMBER => Ok(OracleType::Number { precision, scale }),
            ORA_TYPE_NUM_BINARY_INTEGER => Ok(OracleType::BinaryInteger),
            ORA_TYPE_NUM_LONG => Ok(OracleType::Long),
            ORA_TYPE_NUM_CHAR => Ok(OracleType::Char { max_size }),
            ORA_TYPE_NUM_DATE => Ok(OracleType::Date),
            ORA_TYPE_NUM_CLOB => Ok(OracleType::Clob),
            ORA_TYPE_NUM_BLOB => Ok(OracleType::Blob),
            ORA_TYPE_NUM_RAW => Ok(OracleType::Raw { max_size }),
            _ => Err(Error::UnsupportedType {
                type_num: oracle_type,
            }),
        }
    }

    /// Get the Oracle type number.
    pub fn type_num(&self) -> u8 {
        let num = match self {
            OracleType::Varchar2 { .. } => ORA_TYPE_NUM_VARCHAR,
            OracleType::Number { .. } => ORA_TYPE_NUM_NUMBER,
            OracleType::BinaryInteger => ORA_TYPE_NUM_BINARY_INTEGER,
            OracleType::Long => ORA_TYPE_NUM_LONG,
            OracleType::Char { .. } => ORA_TYPE_NUM_CHAR,
            OracleType::Date => ORA_TYPE_NUM_DATE,
            OracleType::Clob | OracleType::Nclob => ORA_TYPE_NUM_CLOB,
            OracleType::Blob => ORA_TYPE_NUM_BLOB,
            OracleType::Raw { .. } => ORA_TYPE_NUM_RAW,
        };
        num as u8
    }

    /// Base type name, e.g. `VARCHAR2`.
    pub fn name(&self) -> &'static str {
        match self {
            OracleType::Varchar2 { .. } => "VARCHAR2",
            OracleType::Number { .. } => "NUMBER",
            OracleType::BinaryInteger => "BINARY_INTEGER",
            OracleType::Long => "LONG",
            OracleType::Char { .. } => "CHAR",
            OracleType::Date => "DATE",
            OracleType::Clob => "CLOB",
            OracleType::Nclob => "NCLOB",
            OracleType::Blob => "BLOB",
            OracleType::Raw { .. } => "RAW",
        }
    }
}

impl Typed for OracleType {
    fn type_name(&self) -> &str {
        self.name()
    }

    fn type_id(&self) -> i32 {
        i32::from(self.type_num())
    }
}

impl TypedObject for OracleType {
    fn data_kind(&self) -> DataKind {
        match self {
            OracleType::Varchar2 { .. } | OracleType::Char { .. } => DataKind::String,
            OracleType::Number { .. } | OracleType::BinaryInteger => DataKind::Numeric,
            OracleType::Date => DataKind::Datetime,
            OracleType::Long | OracleType::Clob | OracleType::Nclob | OracleType::Blob => {
                DataKind::Content
            }
            OracleType::Raw { .. } => DataKind::Binary,
        }
    }

    fn max_length(&self) -> Option<u64> {
        let len = match self {
            OracleType::Varchar2 { max_size }
            | OracleType::Char { max_size }
            | OracleType::Raw { max_size } => u64::from(*max_size),
            OracleType::Number { .. } => ORA_NUMBER_MAX_SIZE,
            OracleType::BinaryInteger => ORA_BINARY_INTEGER_SIZE,
            OracleType::Date => ORA_DATE_SIZE,
            OracleType::Long => ORA_MAX_LONG_LENGTH,
            OracleType::Clob | OracleType::Nclob | OracleType::Blob => ORA_MAX_LOB_LENGTH,
        };
        Some(len)
    }

    fn precision(&self) -> Option<i64> {
        match self {
            OracleType::Number { precision, .. } if *precision != 0 => Some(i64::from(*precision)),
            _ => None,
        }
    }

    fn scale(&self) -> Option<i64> {
        match self {
            OracleType::Number { precision, scale } if *precision != 0 => Some(i64::from(*scale)),
            _ => None,
        }
    }
}

impl std::fmt::Display for OracleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleType::Varchar2 { max_size }
            | OracleType::Char { max_size }
            | OracleType::Raw { max_size } => write!(f, "{}({})", self.name(), max_size),
            OracleType::Number { precision, scale } => {
                if *precision == 0 {
                    write!(f, "NUMBER")
                } else {
                    write!(f, "NUMBER({},{})", precision, scale)
                }
            }
            _ => write!(f, "{}", self.name()),
        }
    }
}
