//! Type signature parsing and formatting.
//!
//! A type signature is a base type name with optional parenthesized
//! modifiers: `NAME`, `NAME(len)` or `NAME(precision,scale)`.

use tracing::{debug, trace};

use crate::error::{Error, ModifierPart, Result};
use crate::validate::{AcceptAnyType, TypeNameValidator};

/// Modifiers parsed from the parenthesized part of a signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifiers {
    /// No modifiers, or an unterminated `(`.
    None,
    /// Single modifier `NAME(n)`, at most `i32::MAX`. `None` when the token
    /// is not an integer in `0..=i32::MAX`; the attribute's length and
    /// precision are then reset to unset. A negative token such as `-5` also
    /// resolves to unset rather than being stored as a negative length.
    Length(Option<u32>),
    /// Two-part modifier `NAME(p,s)`.
    PrecisionScale { precision: i32, scale: i32 },
}

/// A parsed type signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    /// Base type name, exactly as written before `(`.
    pub base_name: String,
    /// Parsed modifiers.
    pub modifiers: Modifiers,
}

impl TypeSignature {
    /// Parse a signature accepting any base type name.
    pub fn parse(signature: &str) -> Result<Self> {
        Self::parse_with(signature, &AcceptAnyType)
    }

    /// Parse a signature, validating the base name with `validator`.
    ///
    /// The single-length form is lenient: a token that is not an integer
    /// yields `Modifiers::Length(None)`. The two-part form is strict and
    /// returns `Error::MalformedModifier`.
    pub fn parse_with(signature: &str, validator: &dyn TypeNameValidator) -> Result<Self> {
        let Some(open) = signature.find('(') else {
            validator.validate(signature)?;
            trace!(base_name = signature, "parsed plain type signature");
            return Ok(Self {
                base_name: signature.to_string(),
                modifiers: Modifiers::None,
            });
        };

        let base_name = &signature[..open];
        validator.validate(base_name)?;

        let rest = &signature[open + 1..];
        let Some(close) = rest.find(')') else {
            debug!(signature, "unterminated type modifiers ignored");
            return Ok(Self {
                base_name: base_name.to_string(),
                modifiers: Modifiers::None,
            });
        };

        let raw = &rest[..close];
        let modifiers = match raw.split_once(',') {
            None => {
                let length = raw
                    .trim()
                    .parse::<i32>()
                    .ok()
                    .and_then(|len| u32::try_from(len).ok());
                if length.is_none() {
                    debug!(signature, modifier = raw, "unusable length resolves to unset");
                }
                Modifiers::Length(length)
            }
            Some((p, s)) => Modifiers::PrecisionScale {
                precision: parse_strict(p, ModifierPart::Precision)?,
                scale: parse_strict(s, ModifierPart::Scale)?,
            },
        };

        trace!(base_name, ?modifiers, "parsed type signature");
        Ok(Self {
            base_name: base_name.to_string(),
            modifiers,
        })
    }

    /// Precision carried by the signature, if any.
    ///
    /// The single-length form reports its length as precision too.
    pub fn precision(&self) -> Option<i32> {
        match self.modifiers {
            Modifiers::None => None,
            Modifiers::Length(len) => len.and_then(|l| i32::try_from(l).ok()),
            Modifiers::PrecisionScale { precision, .. } => Some(precision),
        }
    }

    /// Scale carried by the signature, if any.
    pub fn scale(&self) -> Option<i32> {
        match self.modifiers {
            Modifiers::PrecisionScale { scale, .. } => Some(scale),
            _ => None,
        }
    }

    /// Single length carried by the signature, if any.
    pub fn length(&self) -> Option<u32> {
        match self.modifiers {
            Modifiers::Length(len) => len,
            _ => None,
        }
    }

    /// Format structured type parts back into a signature.
    ///
    /// Precision and scale win over length; length is only written when
    /// precision is unset.
    pub fn format(
        base_name: &str,
        precision: Option<i32>,
        scale: Option<i32>,
        max_length: Option<u64>,
    ) -> String {
        match (precision, scale, max_length) {
            (Some(p), Some(s), _) => format!("{}({},{})", base_name, p, s),
            (Some(p), None, _) => format!("{}({})", base_name, p),
            (None, _, Some(len)) => format!("{}({})", base_name, len),
            _ => base_name.to_string(),
        }
    }
}

impl std::fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.modifiers {
            Modifiers::None | Modifiers::Length(None) => write!(f, "{}", self.base_name),
            Modifiers::Length(Some(len)) => write!(f, "{}({})", self.base_name, len),
            Modifiers::PrecisionScale { precision, scale } => {
                write!(f, "{}({},{})", self.base_name, precision, scale)
            }
        }
    }
}

fn parse_strict(token: &str, part: ModifierPart) -> Result<i32> {
    let token = token.trim();
    token
        .parse::<i32>()
        .map_err(|_| Error::malformed_modifier(part, token))
}
