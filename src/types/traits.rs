//! Capability traits shared by attributes and data types.

use super::data_kind::DataKind;

/// An object with a mutable name.
pub trait Named {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
}

/// An object that has a data type.
pub trait Typed {
    /// Base type name, without modifiers.
    fn type_name(&self) -> &str;
    /// Opaque type-system code.
    fn type_id(&self) -> i32;
}

/// An object that can describe itself in a short hint.
pub trait ToolTip {
    fn tool_tip(&self) -> String;
}

/// A data type definition that an attribute can switch to.
pub trait TypedObject: Typed {
    fn data_kind(&self) -> DataKind;
    /// Maximum value length, `None` when the type has no declared limit.
    fn max_length(&self) -> Option<u64>;
    fn precision(&self) -> Option<i64>;
    fn scale(&self) -> Option<i64>;
}

/// Read surface of an attribute, used as a copy source.
pub trait AttributeBase: Named + Typed {
    fn ordinal_position(&self) -> u32;
    fn max_length(&self) -> Option<u64>;
    fn scale(&self) -> Option<i32>;
    fn precision(&self) -> Option<i32>;
    fn is_required(&self) -> bool;
    fn is_auto_generated(&self) -> bool;
}
