//! Select field state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Internal state for a select field
#[derive(Debug, Default)]
struct SelectFieldInner {
    /// The currently selected index (if any)
    selected: Option<usize>,
    /// Selection restored by `reset`
    initial: Option<usize>,
    /// Available option labels
    options: Vec<String>,
    /// Whether the user has edited or blurred the field
    touched: bool,
    /// Validation error message (if any)
    error: Option<String>,
}

/// A select field with reactive state.
///
/// `SelectField` manages a group of mutually exclusive options where only
/// one can be selected at a time. Selection is index-based, but options
/// can also be selected by label, which is how change events delivered as
/// strings reach the field. Its validation value is the selected label,
/// so the string rule set applies unchanged.
///
/// # Example
///
/// ```ignore
/// let gender = SelectField::with_options(vec!["female", "male"]).with_selected(0);
///
/// assert_eq!(gender.selected_label().as_deref(), Some("female"));
/// gender.select_label("male");
/// assert!(gender.is_touched());
/// ```
#[derive(Debug)]
pub struct SelectField {
    /// Internal state
    inner: Arc<RwLock<SelectFieldInner>>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
}

impl SelectField {
    /// Create a new select field with no options
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(SelectFieldInner::default())),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create a select field with options
    pub fn with_options(options: Vec<impl Into<String>>) -> Self {
        let options = options.into_iter().map(|l| l.into()).collect();
        Self {
            inner: Arc::new(RwLock::new(SelectFieldInner {
                options,
                ..Default::default()
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Set the default selection (also restored by `reset`)
    pub fn with_selected(self, index: usize) -> Self {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
        {
            guard.selected = Some(index);
            guard.initial = Some(index);
        }
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the currently selected index (if any)
    pub fn selected(&self) -> Option<usize> {
        self.inner
            .read()
            .map(|guard| guard.selected)
            .unwrap_or(None)
    }

    /// Get all option labels
    pub fn options(&self) -> Vec<String> {
        self.inner
            .read()
            .map(|guard| guard.options.clone())
            .unwrap_or_default()
    }

    /// Get the number of options
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.options.len())
            .unwrap_or(0)
    }

    /// Check if there are no options
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Check if a specific index is selected
    pub fn is_selected(&self, index: usize) -> bool {
        self.inner
            .read()
            .map(|guard| guard.selected == Some(index))
            .unwrap_or(false)
    }

    /// Get the label for an option at index
    pub fn label_at(&self, index: usize) -> Option<String> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.get(index).cloned())
    }

    /// Get the label for the currently selected option
    pub fn selected_label(&self) -> Option<String> {
        self.inner.read().ok().and_then(|guard| {
            guard
                .selected
                .and_then(|idx| guard.options.get(idx).cloned())
        })
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Select an option by index and mark the field touched.
    ///
    /// Out-of-bounds indices are ignored.
    pub fn select(&self, index: usize) {
        if let Ok(mut guard) = self.inner.write()
            && index < guard.options.len()
        {
            guard.touched = true;
            if guard.selected != Some(index) {
                guard.selected = Some(index);
                guard.error = None; // Auto-clear error on value change
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Select the option with the given label.
    ///
    /// Returns `false` (leaving the field unchanged) when no option matches.
    pub fn select_label(&self, label: &str) -> bool {
        let index = self
            .inner
            .read()
            .ok()
            .and_then(|guard| guard.options.iter().position(|l| l == label));
        match index {
            Some(index) => {
                self.select(index);
                true
            }
            None => false,
        }
    }

    /// Clear the selection and mark the field touched
    pub fn clear_selection(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.touched = true;
            if guard.selected.is_some() {
                guard.selected = None;
                guard.error = None; // Auto-clear error on value change
            }
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Restore the initial selection, clearing touched and error state
    pub fn reset(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.selected = guard.initial;
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

impl Clone for SelectField {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
        }
    }
}

impl Default for SelectField {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Validatable implementation
// -----------------------------------------------------------------------------

use crate::validation::Validatable;

impl Validatable for SelectField {
    /// Value type is the selected label (empty when nothing is selected)
    type Value = String;

    fn validation_value(&self) -> Self::Value {
        self.selected_label().unwrap_or_default()
    }

    fn apply_change(&self, value: &str) {
        self.select_label(value);
    }

    fn value_string(&self) -> String {
        self.selected_label().unwrap_or_default()
    }

    fn set_error(&self, msg: impl Into<String>) {
        SelectField::set_error(self, msg)
    }

    fn clear_error(&self) {
        SelectField::clear_error(self)
    }

    fn has_error(&self) -> bool {
        SelectField::has_error(self)
    }

    fn error(&self) -> Option<String> {
        SelectField::error(self)
    }

    fn touch(&self) {
        SelectField::touch(self)
    }

    fn is_touched(&self) -> bool {
        SelectField::is_touched(self)
    }

    fn reset(&self) {
        SelectField::reset(self)
    }
}
