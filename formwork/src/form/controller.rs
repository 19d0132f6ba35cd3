//! The form controller.

use std::collections::BTreeMap;

use log::{debug, info, trace};
use thiserror::Error;

use crate::validation::{FieldError, ValidationResult};

use super::{FormEvent, FormSnapshot};

/// Error type for operations addressing fields by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// The named field is not registered on this form.
    #[error("field '{field}' is not registered on this form")]
    UnknownField { field: String },
}

impl FormError {
    /// Creates a new unknown-field error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }
}

/// Type alias for the success callback invoked on a valid submit.
pub(crate) type SubmitCallback = Box<dyn Fn(&FormSnapshot) + Send + Sync>;

/// Internal representation of a registered field.
pub(crate) struct FieldEntry {
    pub(crate) name: String,
    pub(crate) depends_on: Vec<String>,
    pub(crate) write_value: Box<dyn Fn(&str) + Send + Sync>,
    pub(crate) value_string: Box<dyn Fn() -> String + Send + Sync>,
    pub(crate) touch: Box<dyn Fn() + Send + Sync>,
    pub(crate) is_touched: Box<dyn Fn() -> bool + Send + Sync>,
    pub(crate) error: Box<dyn Fn() -> Option<String> + Send + Sync>,
    pub(crate) reset: Box<dyn Fn() + Send + Sync>,
    pub(crate) revalidate: Box<dyn Fn() -> Option<FieldError> + Send + Sync>,
}

/// A form: registered fields with persistent rule chains.
///
/// The form owns no field values; it holds shared handles to its fields
/// and drives them in response to change, blur, submit, and reset
/// operations. Field errors are recomputed from current values on every
/// change, so stored errors are always a pure function of field state.
///
/// # Example
///
/// ```ignore
/// let name = TextField::new();
///
/// let form = Form::builder()
///     .field(&name, "name")
///         .required("Name is required")
///     .on_submit(|values| println!("{values}"))
///     .build();
///
/// form.set_value("name", "Arzu")?;
/// assert!(form.submit().is_valid());
/// ```
pub struct Form {
    entries: Vec<FieldEntry>,
    on_submit: Option<SubmitCallback>,
}

impl Form {
    /// Start building a form.
    pub fn builder() -> super::FormBuilder {
        super::FormBuilder::new()
    }

    pub(crate) fn from_parts(entries: Vec<FieldEntry>, on_submit: Option<SubmitCallback>) -> Self {
        Self { entries, on_submit }
    }

    fn entry(&self, field: &str) -> Result<&FieldEntry, FormError> {
        self.entries
            .iter()
            .find(|e| e.name == field)
            .ok_or_else(|| FormError::unknown_field(field))
    }

    // -------------------------------------------------------------------------
    // Operations
    // -------------------------------------------------------------------------

    /// Write a new value into a field and revalidate it.
    ///
    /// Marks the field touched and also revalidates every field whose
    /// rule chain depends on the changed one.
    pub fn set_value(&self, field: &str, value: &str) -> Result<(), FormError> {
        let entry = self.entry(field)?;
        (entry.write_value)(value);
        trace!("field '{}' changed", field);
        (entry.revalidate)();
        for dependent in &self.entries {
            if dependent.depends_on.iter().any(|d| d == field) {
                trace!("revalidating '{}' (depends on '{}')", dependent.name, field);
                (dependent.revalidate)();
            }
        }
        Ok(())
    }

    /// Mark a field as touched.
    pub fn touch(&self, field: &str) -> Result<(), FormError> {
        let entry = self.entry(field)?;
        (entry.touch)();
        Ok(())
    }

    /// Evaluate every field's rule chain against current values.
    ///
    /// Each field's first failure (or lack of one) is stored on the field;
    /// failures are returned in field declaration order. Touched state is
    /// not consulted.
    pub fn validate_all(&self) -> ValidationResult {
        let mut errors = Vec::new();
        for entry in &self.entries {
            if let Some(error) = (entry.revalidate)() {
                errors.push(error);
            }
        }
        if errors.is_empty() {
            ValidationResult::Valid
        } else {
            ValidationResult::Invalid(errors)
        }
    }

    /// Validate the whole form and invoke the success callback if clean.
    ///
    /// On failure the callback is not invoked and every field is marked
    /// touched, so all errors become visible to the rendering layer.
    pub fn submit(&self) -> ValidationResult {
        let result = self.validate_all();
        match &result {
            ValidationResult::Valid => {
                let snapshot = self.values();
                info!("form submitted with {} field(s)", snapshot.len());
                if let Some(on_submit) = &self.on_submit {
                    on_submit(&snapshot);
                }
            }
            ValidationResult::Invalid(errors) => {
                debug!("submit blocked: {} field(s) failed validation", errors.len());
                for entry in &self.entries {
                    (entry.touch)();
                }
            }
        }
        result
    }

    /// Restore every field to its initial state.
    pub fn reset(&self) {
        for entry in &self.entries {
            (entry.reset)();
        }
        debug!("form reset");
    }

    /// Dispatch a form event to the operation it names.
    pub fn handle(&self, event: FormEvent) -> Result<(), FormError> {
        trace!("handling {:?}", event);
        match event {
            FormEvent::Change { field, value } => self.set_value(&field, &value),
            FormEvent::Blur { field } => self.touch(&field),
            FormEvent::Submit => {
                self.submit();
                Ok(())
            }
            FormEvent::Reset => {
                self.reset();
                Ok(())
            }
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Snapshot of every field's current value.
    pub fn values(&self) -> FormSnapshot {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), (e.value_string)()))
            .collect()
    }

    /// Current error message per failing field.
    pub fn errors(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter_map(|e| (e.error)().map(|msg| (e.name.clone(), msg)))
            .collect()
    }

    /// Current error message per failing field the user has touched.
    ///
    /// This gates presentation only; [`Form::validate_all`] and
    /// [`Form::submit`] always validate every field.
    pub fn visible_errors(&self) -> BTreeMap<String, String> {
        self.entries
            .iter()
            .filter(|e| (e.is_touched)())
            .filter_map(|e| (e.error)().map(|msg| (e.name.clone(), msg)))
            .collect()
    }

    /// Touched flag per field.
    pub fn touched(&self) -> BTreeMap<String, bool> {
        self.entries
            .iter()
            .map(|e| (e.name.clone(), (e.is_touched)()))
            .collect()
    }

    /// Registered field names, in declaration order.
    pub fn field_names(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.name.as_str()).collect()
    }
}
