//! Base type name validation hooks.
//!
//! A validator runs on the base name of every parsed type signature before
//! any modifier is applied to an attribute.

use crate::error::{Error, Result};
use crate::types::OracleType;

/// Accepts or rejects a base type name.
pub trait TypeNameValidator {
    /// Validate a base type name (modifiers already stripped).
    fn validate(&self, type_name: &str) -> Result<()>;
}

/// Validator that accepts every type name.
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyType;

impl TypeNameValidator for AcceptAnyType {
    fn validate(&self, _type_name: &str) -> Result<()> {
        Ok(())
    }
}

/// Validator backed by a fixed list of type names (case-insensitive).
#[derive(Debug, Clone, Default)]
pub struct KnownTypeNames {
    names: Vec<String>,
}

impl KnownTypeNames {
    /// Create a validator accepting exactly `names`.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names
                .into_iter()
                .map(|n| n.into().to_uppercase())
                .collect(),
        }
    }

    /// Validator accepting the base names of the supported Oracle types.
    pub fn oracle() -> Self {
        Self::new(OracleType::TYPE_NAMES.iter().copied())
    }

    /// Check if `type_name` is known.
    pub fn contains(&self, type_name: &str) -> bool {
        let upper = type_name.to_uppercase();
        self.names.iter().any(|n| *n == upper)
    }
}

impl TypeNameValidator for KnownTypeNames {
    fn validate(&self, type_name: &str) -> Result<()> {
        if self.contains(type_name) {
            Ok(())
        } else {
            Err(Error::type_validation(type_name, "unknown data type"))
        }
    }
}
