//! Attribute type metadata for database columns.
//!
//! Parses type signatures such as `NUMERIC(10,2)` into structured fields and
//! keeps an attribute's length, precision and scale consistent when its data
//! type changes.
//!
//! # Example
//!
//! ```
//! use attribute_meta::{AttributeDescriptor, OracleType, Result};
//!
//! fn main() -> Result<()> {
//!     let mut attr = AttributeDescriptor::new().with_name("PRICE");
//!     attr.set_full_type_name("NUMBER(10,2)")?;
//!     assert_eq!(attr.type_name(), "NUMBER");
//!     assert_eq!(attr.precision(), Some(10));
//!
//!     // Switching to a large string type picks a conservative length.
//!     let old = OracleType::Number { precision: 10, scale: 2 };
//!     let new = OracleType::Clob;
//!     attr.on_change_data_type(Some(&old), Some(&new));
//!     assert_eq!(attr.max_length(), Some(100));
//!
//!     Ok(())
//! }
//! ```

pub mod constants;
pub mod error;
pub mod reconcile;
pub mod types;
pub mod validate;

// Re-export main types
pub use error::{Error, ModifierPart, Result};
pub use reconcile::{Reconciliation, ReconcilePolicy, TypeChangeReconciler};
pub use types::{
    AttributeBase, AttributeDescriptor, Column, ColumnMetadata, DataKind, Modifiers, Named,
    OracleType, ToolTip, TypeSignature, Typed, TypedObject,
};
pub use validate::{AcceptAnyType, KnownTypeNames, TypeNameValidator};
