//! Reconciliation of attribute modifiers after a data type change.

use tracing::debug;

use crate::constants::{DEFAULT_MAX_BOUNDED_LENGTH, DEFAULT_STRING_LENGTH};
use crate::types::{AttributeDescriptor, TypedObject};

/// Policy knobs for [`TypeChangeReconciler`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcilePolicy {
    /// Length given to an attribute that switches to a string or content
    /// type with a larger limit than it currently has (default: 100).
    pub default_string_length: u64,
    /// Largest max length copied from a new type; longer limits become
    /// unset (default: `i32::MAX`).
    pub max_bounded_length: u64,
}

impl Default for ReconcilePolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ReconcilePolicy {
    /// Create the default policy.
    pub fn new() -> Self {
        Self {
            default_string_length: DEFAULT_STRING_LENGTH,
            max_bounded_length: DEFAULT_MAX_BOUNDED_LENGTH,
        }
    }

    /// Set the length used when widening into a string or content type.
    ///
    /// # Example
    ///
    /// ```
    /// use attribute_meta::ReconcilePolicy;
    ///
    /// let policy = ReconcilePolicy::new().with_default_string_length(255);
    /// assert_eq!(policy.default_string_length, 255);
    /// ```
    pub fn with_default_string_length(mut self, length: u64) -> Self {
        self.default_string_length = length;
        self
    }

    /// Set the largest max length copied verbatim from a new type.
    pub fn with_max_bounded_length(mut self, length: u64) -> Self {
        self.max_bounded_length = length;
        self
    }
}

/// Outcome of a reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// Nothing was written.
    Unchanged,
    /// Length, precision and scale were rewritten.
    Updated,
}

/// Recomputes an attribute's length, precision and scale when its data type
/// moves to a different [`DataKind`](crate::types::DataKind).
#[derive(Debug, Clone, Default)]
pub struct TypeChangeReconciler {
    policy: ReconcilePolicy,
}

impl TypeChangeReconciler {
    pub fn new(policy: ReconcilePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &ReconcilePolicy {
        &self.policy
    }

    /// Reconcile `descriptor` after its type changed from `old_type` to
    /// `new_type`.
    ///
    /// Nothing happens when either type is missing or both share a data
    /// kind. Otherwise a string/content target whose limit exceeds the
    /// current length gets the policy's default length instead of the new
    /// limit; every other target copies its max length. Precision and scale
    /// are always copied from the new type.
    pub fn on_type_change(
        &self,
        descriptor: &mut AttributeDescriptor,
        old_type: Option<&dyn TypedObject>,
        new_type: Option<&dyn TypedObject>,
    ) -> Reconciliation {
        let (Some(old_type), Some(new_type)) = (old_type, new_type) else {
            return Reconciliation::Unchanged;
        };

        let old_kind = old_type.data_kind();
        let new_kind = new_type.data_kind();
        if old_kind == new_kind {
            return Reconciliation::Unchanged;
        }

        let new_max_length = new_type.max_length();
        if new_kind.is_sized_text_or_content() && new_max_length > descriptor.max_length() {
            descriptor.set_max_length(Some(self.policy.default_string_length));
        } else {
            descriptor.set_max_length(
                new_max_length.filter(|len| *len <= self.policy.max_bounded_length),
            );
        }
        descriptor.set_precision(to_i32(new_type.precision()));
        descriptor.set_scale(to_i32(new_type.scale()));

        debug!(
            attribute = descriptor.name(),
            ?old_kind,
            ?new_kind,
            max_length = ?descriptor.max_length(),
            precision = ?descriptor.precision(),
            scale = ?descriptor.scale(),
            "reconciled attribute after data kind change"
        );
        Reconciliation::Updated
    }
}

fn to_i32(value: Option<i64>) -> Option<i32> {
    value.and_then(|v| i32::try_from(v).ok())
}
