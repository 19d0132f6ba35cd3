//! Text field state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Internal state for a text field
#[derive(Debug, Default)]
struct TextFieldInner {
    /// Current text value
    value: String,
    /// Value restored by `reset`
    initial: String,
    /// Whether the user has edited or blurred the field
    touched: bool,
    /// Validation error message (if any)
    error: Option<String>,
}

/// A text field with reactive state.
///
/// `TextField` is a self-contained field that manages its own value,
/// touched flag, and validation error. The form controller writes values
/// and errors through it; the rendering layer reads them back.
///
/// # Example
///
/// ```ignore
/// let email = TextField::new();
///
/// let form = Form::builder()
///     .field(&email, "email")
///         .required("Email is required")
///         .email("Enter a valid email address")
///     .build();
///
/// form.set_value("email", "nope")?;
/// assert!(email.has_error());
/// ```
#[derive(Debug)]
pub struct TextField {
    /// Internal state
    inner: Arc<RwLock<TextFieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl TextField {
    /// Create a new empty text field
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(TextFieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a text field with an initial value
    pub fn with_value(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            inner: Arc::new(RwLock::new(TextFieldInner {
                initial: value.clone(),
                value,
                touched: false,
                error: None,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the current text value
    pub fn value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.value.clone())
            .unwrap_or_default()
    }

    /// Get the value restored by `reset`
    pub fn initial_value(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.initial.clone())
            .unwrap_or_default()
    }

    /// Check if the field is empty
    pub fn is_empty(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.value.is_empty())
            .unwrap_or(true)
    }

    /// Get the length of the current value
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.value.len())
            .unwrap_or(0)
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Set the text value and mark the field touched
    pub fn set_value(&self, value: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = value.into();
            guard.touched = true;
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the field value
    pub fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value.clear();
            guard.touched = true;
            guard.error = None; // Auto-clear error on value change
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Restore the initial value, clearing touched and error state
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.value = guard.initial.clone();
            guard.touched = false;
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    // -------------------------------------------------------------------------
    // Touched tracking
    // -------------------------------------------------------------------------

    /// Mark the field as touched (the user left the field)
    pub fn touch(&self) {
        if let Ok(mut guard) = self.inner.write()
            && !guard.touched
        {
            guard.touched = true;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if the user has interacted with the field
    pub fn is_touched(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.touched)
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the field state has changed
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Set a validation error message on this field.
    pub fn set_error(&self, msg: impl Into<String>) {
        if let Ok(mut guard) = self.inner.write() {
            guard.error = Some(msg.into());
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Clear the validation error.
    pub fn clear_error(&self) {
        if let Ok(mut guard) = self.inner.write()
            && guard.error.is_some()
        {
            guard.error = None;
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Check if this field has a validation error.
    pub fn has_error(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.error.is_some())
            .unwrap_or(false)
    }

    /// Get the current validation error message (if any).
    pub fn error(&self) -> Option<String> {
        self.inner
            .read()
            .map(|guard| guard.error.clone())
            .unwrap_or(None)
    }

    /// Get the error message only once the field has been touched.
    pub fn visible_error(&self) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| if guard.touched { guard.error.clone() } else { None })
    }
}

impl Clone for TextField {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for TextField {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

use crate::validation::Validatable;

impl Validatable for TextField {
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.value()
    }

    fn apply_change(&self, value: &str) {
        self.set_value(value);
    }

    fn value_string(&self) -> String {
        self.value()
    }

    fn set_error(&self, msg: impl Into<String>) {
        TextField::set_error(self, msg)
    }

    fn clear_error(&self) {
        TextField::clear_error(self)
    }

    fn has_error(&self) -> bool {
        TextField::has_error(self)
    }

    fn error(&self) -> Option<String> {
        TextField::error(self)
    }

    fn touch(&self) {
        TextField::touch(self)
    }

    fn is_touched(&self) -> bool {
        TextField::is_touched(self)
    }

    fn reset(&self) {
        TextField::reset(self)
    }
}
