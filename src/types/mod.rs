//! Attribute and data type metadata.

mod attribute;
mod column;
mod data_kind;
mod metadata;
mod oracle_type;
mod signature;
mod traits;

pub use attribute::AttributeDescriptor;
pub use column::Column;
pub use data_kind::DataKind;
pub use metadata::ColumnMetadata;
pub use oracle_type::OracleType;
pub use signature::{Modifiers, TypeSignature};
pub use traits::{AttributeBase, Named, ToolTip, Typed, TypedObject};
