//! Fluent builder for forms and their per-field rule chains.

use email_address::EmailAddress;
use regex::Regex;

use crate::validation::{FieldError, Rule, RuleKind, Validatable};

use super::Form;
use super::controller::{FieldEntry, SubmitCallback};
use super::snapshot::FormSnapshot;

/// Builder for a form's fields and rule chains.
///
/// # Example
///
/// ```ignore
/// let form = Form::builder()
///     .field(&name, "name")
///         .required("Name is required")
///     .field(&email, "email")
///         .required("Email is required")
///         .email("Enter a valid email address")
///     .on_submit(|values| log::info!("submitted: {values}"))
///     .build();
/// ```
pub struct FormBuilder {
    entries: Vec<FieldEntry>,
    on_submit: Option<SubmitCallback>,
}

impl FormBuilder {
    /// Create an empty form builder.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            on_submit: None,
        }
    }

    /// Add a field to the form under the given name.
    pub fn field<F: Validatable + Clone + 'static>(
        self,
        field: &F,
        name: impl Into<String>,
    ) -> FieldBuilder<F>
    where
        F::Value: 'static,
    {
        FieldBuilder {
            builder: self,
            field: field.clone(),
            name: name.into(),
            rules: Vec::new(),
            depends_on: Vec::new(),
        }
    }

    /// Set the callback invoked with the value snapshot on a valid submit.
    pub fn on_submit<C>(mut self, callback: C) -> Self
    where
        C: Fn(&FormSnapshot) + Send + Sync + 'static,
    {
        self.on_submit = Some(Box::new(callback));
        self
    }

    /// Finish building the form.
    ///
    /// # Panics
    ///
    /// Panics when two fields were registered under the same name, or when
    /// a cross-field rule references a name that was never registered.
    pub fn build(self) -> Form {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.name == entry.name) {
                panic!("duplicate field name '{}'", entry.name);
            }
            for dep in &entry.depends_on {
                if !self.entries.iter().any(|e| e.name == *dep) {
                    panic!(
                        "field '{}' depends on unregistered field '{}'",
                        entry.name, dep
                    );
                }
            }
        }
        Form::from_parts(self.entries, self.on_submit)
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for adding validation rules to a single field.
pub struct FieldBuilder<F: Validatable> {
    builder: FormBuilder,
    field: F,
    name: String,
    rules: Vec<Rule<F::Value>>,
    depends_on: Vec<String>,
}

impl<F: Validatable + Clone + 'static> FieldBuilder<F>
where
    F::Value: 'static,
{
    /// Add a custom validation rule.
    ///
    /// The predicate returns `true` when the value passes.
    pub fn rule<P>(mut self, kind: RuleKind, check: P, msg: impl Into<String>) -> Self
    where
        P: Fn(&F::Value) -> bool + Send + Sync + 'static,
    {
        self.rules.push(Rule::new(kind, msg, check));
        self
    }

    /// Continue to the next field.
    pub fn field<F2: Validatable + Clone + 'static>(
        self,
        field: &F2,
        name: impl Into<String>,
    ) -> FieldBuilder<F2>
    where
        F2::Value: 'static,
    {
        let builder = self.finalize();
        builder.field(field, name)
    }

    /// Set the success callback and return to the form builder.
    pub fn on_submit<C>(self, callback: C) -> FormBuilder
    where
        C: Fn(&FormSnapshot) + Send + Sync + 'static,
    {
        self.finalize().on_submit(callback)
    }

    /// Finalize this field and finish building the form.
    pub fn build(self) -> Form {
        self.finalize().build()
    }

    /// Finalize this field and return the form builder.
    fn finalize(self) -> FormBuilder {
        let name = self.name;
        let rules = self.rules;

        let field_for_write = self.field.clone();
        let field_for_value = self.field.clone();
        let field_for_touch = self.field.clone();
        let field_for_touched = self.field.clone();
        let field_for_error = self.field.clone();
        let field_for_reset = self.field.clone();
        let field_for_validate = self.field;

        let name_for_validate = name.clone();
        let revalidate: Box<dyn Fn() -> Option<FieldError> + Send + Sync> = Box::new(move || {
            let value = field_for_validate.validation_value();
            for rule in &rules {
                if !rule.check(&value) {
                    field_for_validate.set_error(rule.message());
                    return Some(FieldError::new(
                        name_for_validate.clone(),
                        rule.kind(),
                        rule.message(),
                    ));
                }
            }
            field_for_validate.clear_error();
            None
        });

        let mut builder = self.builder;
        builder.entries.push(FieldEntry {
            name,
            depends_on: self.depends_on,
            write_value: Box::new(move |value| field_for_write.apply_change(value)),
            value_string: Box::new(move || field_for_value.value_string()),
            touch: Box::new(move || field_for_touch.touch()),
            is_touched: Box::new(move || field_for_touched.is_touched()),
            error: Box::new(move || field_for_error.error()),
            reset: Box::new(move || field_for_reset.reset()),
            revalidate,
        });
        builder
    }
}

// Built-in rules for String values
impl<F: Validatable<Value = String> + Clone + 'static> FieldBuilder<F> {
    /// Require the field to be non-blank.
    pub fn required(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(RuleKind::Required, |v| !v.trim().is_empty(), msg)
    }

    /// Require minimum length (in characters).
    pub fn min_length(self, min: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(RuleKind::TooShort, move |v| v.chars().count() >= min, msg)
    }

    /// Require maximum length (in characters).
    pub fn max_length(self, max: usize, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(RuleKind::TooLong, move |v| v.chars().count() <= max, msg)
    }

    /// Require the value to match a regex pattern.
    ///
    /// Anchoring is the caller's responsibility.
    pub fn pattern(self, pattern: &str, kind: RuleKind, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let re = Regex::new(pattern).expect("Invalid regex pattern");
        self.rule(kind, move |v| re.is_match(v), msg)
    }

    /// Require a well-formed email address.
    pub fn email(self, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        self.rule(
            RuleKind::InvalidFormat,
            |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    EmailAddress::is_valid(v)
                }
            },
            msg,
        )
    }

    /// Require the value to end with `@<suffix>`, anchored at the end.
    pub fn domain(self, suffix: &str, msg: impl Into<String>) -> Self {
        let msg = msg.into();
        let re = Regex::new(&format!("@{}$", regex::escape(suffix)))
            .expect("Invalid domain suffix");
        self.rule(
            RuleKind::DomainNotAllowed,
            move |v| {
                if v.is_empty() {
                    true // Empty is valid; use required() for non-empty
                } else {
                    re.is_match(v)
                }
            },
            msg,
        )
    }

    /// Require the value to equal another field's value at evaluation time.
    ///
    /// `other_name` must be the name the other field is registered under;
    /// it records the dependency so the other field's changes revalidate
    /// this one.
    pub fn matches<O>(
        mut self,
        other: &O,
        other_name: impl Into<String>,
        msg: impl Into<String>,
    ) -> Self
    where
        O: Validatable<Value = String> + Clone + 'static,
    {
        let msg = msg.into();
        self.depends_on.push(other_name.into());
        let other = other.clone();
        self.rule(
            RuleKind::Mismatch,
            move |v| *v == other.validation_value(),
            msg,
        )
    }
}
