//! Prelude module for convenient imports.
//!
//! ```ignore
//! use formwork::prelude::*;
//! ```

pub use crate::fields::{SelectField, TextField};
pub use crate::form::{FieldBuilder, Form, FormBuilder, FormError, FormEvent, FormSnapshot};
pub use crate::registration::{GENDER_OPTIONS, RegistrationForm};
pub use crate::validation::{FieldError, Rule, RuleKind, Validatable, ValidationResult};
