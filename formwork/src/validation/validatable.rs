//! Validatable trait for fields that support validation.

/// Trait for fields the form controller can validate.
///
/// This trait provides a common interface for extracting values from
/// fields, writing change-event payloads back into them, and managing
/// their touched and error state.
pub trait Validatable: Send + Sync {
    /// The value type used for validation.
    type Value;

    /// Extract the current value for validation.
    fn validation_value(&self) -> Self::Value;

    /// Write the raw value delivered by a change event into the field.
    fn apply_change(&self, value: &str);

    /// Render the current value for a submitted snapshot.
    fn value_string(&self) -> String;

    /// Set a validation error on this field.
    fn set_error(&self, msg: impl Into<String>);

    /// Clear the validation error.
    fn clear_error(&self);

    /// Check if the field has a validation error.
    fn has_error(&self) -> bool;

    /// Get the current validation error message (if any).
    fn error(&self) -> Option<String>;

    /// Mark the field as touched.
    fn touch(&self);

    /// Check if the user has interacted with the field.
    fn is_touched(&self) -> bool;

    /// Get the error message only once the field has been touched.
    ///
    /// Display gating only: validation itself never consults the
    /// touched flag.
    fn visible_error(&self) -> Option<String> {
        if self.is_touched() { self.error() } else { None }
    }

    /// Restore the field to its initial state.
    fn reset(&self);
}
