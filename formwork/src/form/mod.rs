//! The form controller: registered fields, rule chains, submit gating.

mod builder;
mod controller;
mod event;
mod snapshot;

pub use builder::{FieldBuilder, FormBuilder};
pub use controller::{Form, FormError};
pub use event::FormEvent;
pub use snapshot::FormSnapshot;
