//! The registration form: five fields wired with their validation rules.

use crate::fields::{SelectField, TextField};
use crate::form::{Form, FormError, FormEvent, FormSnapshot};
use crate::validation::ValidationResult;

/// Gender options offered by the registration form.
pub const GENDER_OPTIONS: [&str; 2] = ["female", "male"];

/// A registration form with name, email, gender, password, and password
/// confirmation fields.
///
/// Accepted emails must end with `@code.edu.az`. Gender defaults to
/// `female`; every other field starts empty. The callback passed to
/// [`RegistrationForm::new`] receives the value snapshot once a submit
/// passes validation.
///
/// # Example
///
/// ```ignore
/// let form = RegistrationForm::new(|values| {
///     log::info!("registered: {values}");
/// });
///
/// form.set_value("name", "Aysel")?;
/// form.set_value("email", "aysel@code.edu.az")?;
/// form.set_value("password", "unguessable")?;
/// form.set_value("acceptPassword", "unguessable")?;
/// assert!(form.submit().is_valid());
/// ```
pub struct RegistrationForm {
    name: TextField,
    email: TextField,
    gender: SelectField,
    password: TextField,
    accept_password: TextField,
    form: Form,
}

impl RegistrationForm {
    /// Build the form, wiring each field's rule chain.
    pub fn new<C>(on_submit: C) -> Self
    where
        C: Fn(&FormSnapshot) + Send + Sync + 'static,
    {
        let name = TextField::new();
        let email = TextField::new();
        let gender = SelectField::with_options(GENDER_OPTIONS.to_vec()).with_selected(0);
        let password = TextField::new();
        let accept_password = TextField::new();

        let form = Form::builder()
            .field(&name, "name")
            .required("Name is required")
            .max_length(50, "Name must be at most 50 characters")
            .field(&email, "email")
            .required("Email is required")
            .email("Enter a valid email address")
            .domain("code.edu.az", "Only @code.edu.az addresses are accepted")
            .field(&gender, "gender")
            .required("Gender is required")
            .field(&password, "password")
            .min_length(8, "Password must be at least 8 characters")
            .required("Password is required")
            .field(&accept_password, "acceptPassword")
            .matches(&password, "password", "Passwords must match")
            .required("Password confirmation is required")
            .on_submit(on_submit)
            .build();

        Self {
            name,
            email,
            gender,
            password,
            accept_password,
            form,
        }
    }

    // -------------------------------------------------------------------------
    // Field handles
    // -------------------------------------------------------------------------

    /// The name field
    pub fn name(&self) -> &TextField {
        &self.name
    }

    /// The email field
    pub fn email(&self) -> &TextField {
        &self.email
    }

    /// The gender field
    pub fn gender(&self) -> &SelectField {
        &self.gender
    }

    /// The password field
    pub fn password(&self) -> &TextField {
        &self.password
    }

    /// The password confirmation field
    pub fn accept_password(&self) -> &TextField {
        &self.accept_password
    }

    /// The underlying form controller
    pub fn form(&self) -> &Form {
        &self.form
    }

    // -------------------------------------------------------------------------
    // Delegated operations
    // -------------------------------------------------------------------------

    /// Write a new value into a field and revalidate it.
    pub fn set_value(&self, field: &str, value: &str) -> Result<(), FormError> {
        self.form.set_value(field, value)
    }

    /// Mark a field as touched.
    pub fn touch(&self, field: &str) -> Result<(), FormError> {
        self.form.touch(field)
    }

    /// Evaluate every field's rule chain against current values.
    pub fn validate_all(&self) -> ValidationResult {
        self.form.validate_all()
    }

    /// Validate the whole form and invoke the success callback if clean.
    pub fn submit(&self) -> ValidationResult {
        self.form.submit()
    }

    /// Restore every field to its initial state.
    pub fn reset(&self) {
        self.form.reset()
    }

    /// Dispatch a form event.
    pub fn handle(&self, event: FormEvent) -> Result<(), FormError> {
        self.form.handle(event)
    }

    /// Snapshot of every field's current value.
    pub fn values(&self) -> FormSnapshot {
        self.form.values()
    }

    /// Current error message per failing field.
    pub fn errors(&self) -> std::collections::BTreeMap<String, String> {
        self.form.errors()
    }

    /// Current error message per failing field the user has touched.
    pub fn visible_errors(&self) -> std::collections::BTreeMap<String, String> {
        self.form.visible_errors()
    }
}
