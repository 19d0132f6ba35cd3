//! Form validation: rule chains evaluated against field values.
//!
//! Each field registered on a form carries an ordered chain of rules.
//! Evaluation runs the chain in declared order and the first failing rule
//! supplies the field's error, tagged with a [`RuleKind`].
//!
//! # Example
//!
//! ```ignore
//! use formwork::prelude::*;
//!
//! let password = TextField::new();
//! let confirm = TextField::new();
//!
//! let form = Form::builder()
//!     .field(&password, "password")
//!         .min_length(8, "Password must be at least 8 characters")
//!         .required("Password is required")
//!     .field(&confirm, "confirm")
//!         .matches(&password, "password", "Passwords must match")
//!         .required("Password confirmation is required")
//!     .build();
//!
//! let result = form.validate_all();
//! if result.is_valid() {
//!     // Proceed with submission
//! }
//! ```

mod result;
mod rule;
mod validatable;

pub use result::{FieldError, ValidationResult};
pub use rule::{Rule, RuleKind};
pub use validatable::Validatable;
