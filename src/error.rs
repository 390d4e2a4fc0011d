//! Error types for attribute type metadata.

use thiserror::Error;

/// Result type alias for attribute metadata operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of a `(precision,scale)` modifier failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModifierPart {
    Precision,
    Scale,
}

impl std::fmt::Display for ModifierPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ModifierPart::Precision => write!(f, "precision"),
            ModifierPart::Scale => write!(f, "scale"),
        }
    }
}

/// Error type for attribute metadata operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Base type name rejected by a validator.
    #[error("Invalid type name '{type_name}': {reason}")]
    TypeValidation { type_name: String, reason: String },

    /// Precision or scale of a two-part modifier is not an integer.
    #[error("Malformed {part} modifier: '{value}'")]
    MalformedModifier { part: ModifierPart, value: String },

    /// Unsupported raw Oracle data type number.
    #[error("Unsupported Oracle data type: {type_num}")]
    UnsupportedType { type_num: u8 },
}

impl Error {
    /// Create a type validation error.
    pub fn type_validation(type_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TypeValidation {
            type_name: type_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a malformed modifier error.
    pub fn malformed_modifier(part: ModifierPart, value: impl Into<String>) -> Self {
        Self::MalformedModifier {
            part,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::type_validation("FOO", "unknown type").to_string(),
            "Invalid type name 'FOO': unknown type"
        );
        assert_eq!(
            Error::malformed_modifier(ModifierPart::Scale, "x").to_string(),
            "Malformed scale modifier: 'x'"
        );
        assert_eq!(
            Error::UnsupportedType { type_num: 200 }.to_string(),
            "Unsupported Oracle data type: 200"
        );
    }
}
