//! Attribute (column) type metadata.
//!
//! `AttributeDescriptor` owns one attribute's type fields and keeps them
//! consistent when a full type signature is applied or the data type changes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;
use crate::reconcile::{Reconciliation, TypeChangeReconciler};
use crate::validate::{AcceptAnyType, TypeNameValidator};

use super::signature::{Modifiers, TypeSignature};
use super::traits::{AttributeBase, Named, ToolTip, Typed, TypedObject};

/// Type metadata of a single attribute.
///
/// The base type name never carries modifiers; those live in `max_length`,
/// `precision` and `scale`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeDescriptor {
    name: String,
    ordinal_position: u32,
    type_name: String,
    type_id: i32,
    max_length: Option<u64>,
    #[serde(default, deserialize_with = "deserialize_unset_marker")]
    scale: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_unset_marker")]
    precision: Option<i32>,
    required: bool,
    auto_generated: bool,
}

impl AttributeDescriptor {
    /// Create an empty attribute. All modifiers start unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot every field of `source` into a new attribute.
    pub fn from_source<S: AttributeBase + ?Sized>(source: &S) -> Self {
        Self::new()
            .with_name(source.name())
            .with_type(source.type_name(), source.type_id())
            .with_ordinal_position(source.ordinal_position())
            .with_max_length(AttributeBase::max_length(source))
            .with_scale(AttributeBase::scale(source))
            .with_precision(AttributeBase::precision(source))
            .with_required(source.is_required())
            .with_auto_generated(source.is_auto_generated())
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the base type name and type code without validation.
    pub fn with_type(mut self, type_name: impl Into<String>, type_id: i32) -> Self {
        self.type_name = type_name.into();
        self.type_id = type_id;
        self
    }

    pub fn with_ordinal_position(mut self, ordinal_position: u32) -> Self {
        self.ordinal_position = ordinal_position;
        self
    }

    pub fn with_max_length(mut self, max_length: Option<u64>) -> Self {
        self.max_length = max_length;
        self
    }

    pub fn with_scale(mut self, scale: Option<i32>) -> Self {
        self.set_scale(scale);
        self
    }

    pub fn with_precision(mut self, precision: Option<i32>) -> Self {
        self.set_precision(precision);
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_auto_generated(mut self, auto_generated: bool) -> Self {
        self.auto_generated = auto_generated;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn ordinal_position(&self) -> u32 {
        self.ordinal_position
    }

    pub fn set_ordinal_position(&mut self, ordinal_position: u32) {
        self.ordinal_position = ordinal_position;
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Set the base type name, accepting any name.
    pub fn set_type_name(&mut self, type_name: impl Into<String>) -> Result<()> {
        self.set_type_name_with(type_name, &AcceptAnyType)
    }

    /// Set the base type name after `validator` accepts it.
    pub fn set_type_name_with(
        &mut self,
        type_name: impl Into<String>,
        validator: &dyn TypeNameValidator,
    ) -> Result<()> {
        let type_name = type_name.into();
        validator.validate(&type_name)?;
        self.type_name = type_name;
        Ok(())
    }

    /// Apply a full type signature such as `NUMERIC(10,2)`.
    pub fn set_full_type_name(&mut self, signature: &str) -> Result<()> {
        self.set_full_type_name_with(signature, &AcceptAnyType)
    }

    /// Apply a full type signature, validating its base name.
    ///
    /// The signature is parsed completely before any field is written, so an
    /// error leaves the attribute untouched. A single modifier sets both the
    /// max length and the precision; a two-part modifier sets precision and
    /// scale; a plain name keeps the current modifiers.
    pub fn set_full_type_name_with(
        &mut self,
        signature: &str,
        validator: &dyn TypeNameValidator,
    ) -> Result<()> {
        let parsed = TypeSignature::parse_with(signature, validator)?;
        match parsed.modifiers {
            Modifiers::None => {}
            Modifiers::Length(len) => {
                self.max_length = len.map(u64::from);
                self.precision = len.and_then(|l| i32::try_from(l).ok());
            }
            Modifiers::PrecisionScale { precision, scale } => {
                self.set_precision(Some(precision));
                self.set_scale(Some(scale));
            }
        }
        self.type_name = parsed.base_name;
        Ok(())
    }

    /// Full type signature, e.g. `VARCHAR(255)`.
    pub fn full_type_name(&self) -> String {
        TypeSignature::format(&self.type_name, self.precision, self.scale, self.max_length)
    }

    pub fn type_id(&self) -> i32 {
        self.type_id
    }

    pub fn set_type_id(&mut self, type_id: i32) {
        self.type_id = type_id;
    }

    pub fn max_length(&self) -> Option<u64> {
        self.max_length
    }

    pub fn set_max_length(&mut self, max_length: Option<u64>) {
        self.max_length = max_length;
    }

    pub fn scale(&self) -> Option<i32> {
        self.scale
    }

    /// Set the scale. `Some(-1)` is the legacy "unset" marker and is stored
    /// as `None`.
    pub fn set_scale(&mut self, scale: Option<i32>) {
        self.scale = unset_marker_to_none(scale);
    }

    pub fn precision(&self) -> Option<i32> {
        self.precision
    }

    /// Set the precision. `Some(-1)` is stored as `None`.
    pub fn set_precision(&mut self, precision: Option<i32>) {
        self.precision = unset_marker_to_none(precision);
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn set_required(&mut self, required: bool) {
        self.required = required;
    }

    pub fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }

    pub fn set_auto_generated(&mut self, auto_generated: bool) {
        self.auto_generated = auto_generated;
    }

    /// Extra type modifiers; plain attributes have none.
    pub fn type_modifiers(&self) -> i64 {
        0
    }

    pub fn description(&self) -> Option<&str> {
        None
    }

    pub fn is_persisted(&self) -> bool {
        true
    }

    /// Reconcile length, precision and scale after the data type changed,
    /// using the default policy.
    pub fn on_change_data_type(
        &mut self,
        old_type: Option<&dyn TypedObject>,
        new_type: Option<&dyn TypedObject>,
    ) -> Reconciliation {
        TypeChangeReconciler::default().on_type_change(self, old_type, new_type)
    }
}

fn unset_marker_to_none(value: Option<i32>) -> Option<i32> {
    value.filter(|v| *v != -1)
}

fn deserialize_unset_marker<'de, D>(deserializer: D) -> std::result::Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(unset_marker_to_none)
}

impl std::fmt::Display for AttributeDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, type={}, pos={}",
            self.name, self.type_name, self.ordinal_position
        )
    }
}

impl Named for AttributeDescriptor {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }
}

impl Typed for AttributeDescriptor {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn type_id(&self) -> i32 {
        self.type_id
    }
}

impl ToolTip for AttributeDescriptor {
    fn tool_tip(&self) -> String {
        self.full_type_name()
    }
}

impl AttributeBase for AttributeDescriptor {
    fn ordinal_position(&self) -> u32 {
        self.ordinal_position
    }

    fn max_length(&self) -> Option<u64> {
        self.max_length
    }

    fn scale(&self) -> Option<i32> {
        self.scale
    }

    fn precision(&self) -> Option<i32> {
        self.precision
    }

    fn is_required(&self) -> bool {
        self.required
    }

    fn is_auto_generated(&self) -> bool {
        self.auto_generated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::validate::KnownTypeNames;

    fn make_numeric() -> AttributeDescriptor {
        AttributeDescriptor::new()
            .with_name("AMOUNT")
            .with_type("NUMERIC", 2)
            .with_ordinal_position(3)
            .with_max_length(Some(22))
            .with_precision(Some(12))
            .with_scale(Some(4))
    }

    #[test]
    fn test_new_is_unset() {
        let attr = AttributeDescriptor::new();
        assert_eq!(attr.max_length(), None);
        assert_eq!(attr.precision(), None);
        assert_eq!(attr.scale(), None);
        assert!(!attr.is_required());
    }

    #[test]
    fn test_set_full_type_name_single_length() {
        let mut attr = AttributeDescriptor::new();
        attr.set_full_type_name("VARCHAR(255)").unwrap();

        assert_eq!(attr.type_name(), "VARCHAR");
        assert_eq!(attr.max_length(), Some(255));
        assert_eq!(attr.precision(), Some(255));
        assert_eq!(attr.scale(), None);
    }

    #[test]
    fn test_set_full_type_name_precision_scale() {
        let mut attr = AttributeDescriptor::new().with_max_length(Some(40));
        attr.set_full_type_name("NUMERIC(10,2)").unwrap();

        assert_eq!(attr.type_name(), "NUMERIC");
        assert_eq!(attr.precision(), Some(10));
        assert_eq!(attr.scale(), Some(2));
        assert_eq!(attr.max_length(), Some(40));
    }

    #[test]
    fn test_set_full_type_name_plain_keeps_modifiers() {
        let mut attr = make_numeric();
        attr.set_full_type_name("INTEGER").unwrap();

        assert_eq!(attr.type_name(), "INTEGER");
        assert_eq!(attr.max_length(), Some(22));
        assert_eq!(attr.precision(), Some(12));
        assert_eq!(attr.scale(), Some(4));
    }

    #[test]
    fn test_non_numeric_length_resets_to_unset() {
        let mut attr = make_numeric();
        attr.set_full_type_name("VARCHAR(MAX)").unwrap();

        assert_eq!(attr.type_name(), "VARCHAR");
        assert_eq!(attr.max_length(), None);
        assert_eq!(attr.precision(), None);
        assert_eq!(attr.scale(), Some(4));
    }

    #[test]
    fn test_rejected_name_leaves_attribute_untouched() {
        let mut attr = make_numeric();
        let before = attr.clone();
        let v = KnownTypeNames::new(["NUMERIC"]);

        let err = attr.set_full_type_name_with("TEXT(100)", &v).unwrap_err();
        assert!(matches!(err, Error::TypeValidation { ref type_name, .. } if type_name == "TEXT"));
        assert_eq!(attr, before);
    }

    #[test]
    fn test_malformed_precision_leaves_attribute_untouched() {
        let mut attr = make_numeric();
        let before = attr.clone();

        assert!(attr.set_full_type_name("DECIMAL(10,x)").is_err());
        assert_eq!(attr, before);
    }

    #[test]
    fn test_set_type_name_with_validator() {
        let mut attr = AttributeDescriptor::new();
        let v = KnownTypeNames::oracle();

        attr.set_type_name_with("VARCHAR2", &v).unwrap();
        assert_eq!(attr.type_name(), "VARCHAR2");
        assert!(attr.set_type_name_with("VARCHAR", &v).is_err());
        assert_eq!(attr.type_name(), "VARCHAR2");
    }

    #[test]
    fn test_unset_marker_maps_to_none() {
        let mut attr = AttributeDescriptor::new();
        for value in [i32::MIN, -2, 0, 1, i32::MAX] {
            attr.set_scale(Some(value));
            attr.set_precision(Some(value));
            assert_eq!(attr.scale(), Some(value));
            assert_eq!(attr.precision(), Some(value));
        }

        attr.set_scale(Some(-1));
        attr.set_precision(Some(-1));
        assert_eq!(attr.scale(), None);
        assert_eq!(attr.precision(), None);

        attr.set_scale(Some(3));
        attr.set_scale(None);
        assert_eq!(attr.scale(), None);
    }

    #[test]
    fn test_full_type_name() {
        let mut attr = AttributeDescriptor::new();
        attr.set_full_type_name("NUMERIC(10,2)").unwrap();
        assert_eq!(attr.full_type_name(), "NUMERIC(10,2)");
        assert_eq!(attr.tool_tip(), "NUMERIC(10,2)");

        attr.set_full_type_name("VARCHAR(255)").unwrap();
        attr.set_scale(None);
        assert_eq!(attr.full_type_name(), "VARCHAR(255)");
    }

    #[test]
    fn test_copy_is_a_snapshot() {
        let source = make_numeric().with_required(true).with_auto_generated(true);
        let mut copy = AttributeDescriptor::from_source(&source);
        assert_eq!(copy, source);

        copy.set_name("OTHER");
        copy.set_precision(None);
        assert_eq!(source.name(), "AMOUNT");
        assert_eq!(source.precision(), Some(12));
    }

    #[test]
    fn test_display() {
        assert_eq!(make_numeric().to_string(), "AMOUNT, type=NUMERIC, pos=3");
    }

    #[test]
    fn test_fixed_properties() {
        let attr = make_numeric();
        assert_eq!(attr.type_modifiers(), 0);
        assert_eq!(attr.description(), None);
        assert!(attr.is_persisted());
    }

    #[test]
    fn test_named_trait() {
        let mut attr = make_numeric();
        Named::set_name(&mut attr, "TOTAL".to_string());
        assert_eq!(Named::name(&attr), "TOTAL");
    }

    #[test]
    fn test_deserialize_unset_marker() {
        let json = r#"{"name":"C","ordinal_position":1,"type_name":"NUMBER","type_id":2,
            "max_length":null,"scale":-1,"precision":-1,"required":false,"auto_generated":false}"#;
        let attr: AttributeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(attr.scale(), None);
        assert_eq!(attr.precision(), None);

        let json = r#"{"name":"C","ordinal_position":1,"type_name":"NUMBER","type_id":2,
            "max_length":22,"required":false,"auto_generated":false}"#;
        let attr: AttributeDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(attr.scale(), None);
        assert_eq!(attr.max_length(), Some(22));
    }

    #[test]
    fn test_length_at_i32_boundary() {
        let mut attr = AttributeDescriptor::new();
        attr.set_full_type_name("VARCHAR(2147483647)").unwrap();
        assert_eq!(attr.max_length(), Some(i32::MAX as u64));
        assert_eq!(attr.precision(), Some(i32::MAX));

        attr.set_full_type_name("VARCHAR(2147483648)").unwrap();
        assert_eq!(attr.max_length(), None);
        assert_eq!(attr.precision(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let attr = make_numeric();
        let json = serde_json::to_string(&attr).unwrap();
        let back: AttributeDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attr);
    }
}
