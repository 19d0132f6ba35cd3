//! Validation rules and their failure kinds.

use thiserror::Error;

/// Classifies why a rule rejected a value.
///
/// Every reported validation failure carries one of these alongside its
/// human-readable message, so consumers can react to the rule that failed
/// without parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum RuleKind {
    /// A required value was absent or blank.
    #[error("value is required")]
    Required,
    /// The value was shorter than the rule allows.
    #[error("value is too short")]
    TooShort,
    /// The value was longer than the rule allows.
    #[error("value is too long")]
    TooLong,
    /// The value did not have the expected shape.
    #[error("value is malformed")]
    InvalidFormat,
    /// The value belongs to a domain the rule does not accept.
    #[error("domain is not allowed")]
    DomainNotAllowed,
    /// The value did not equal the value it must match.
    #[error("values do not match")]
    Mismatch,
    /// A caller-supplied predicate rejected the value.
    #[error("value was rejected")]
    Custom,
}

/// Type alias for rule predicate closures.
type Predicate<V> = Box<dyn Fn(&V) -> bool + Send + Sync>;

/// A single validation rule: a predicate plus the error it reports.
///
/// Rules are assembled into per-field chains by the form builder; the
/// chain is evaluated in declared order and the first failing rule wins.
pub struct Rule<V> {
    kind: RuleKind,
    message: String,
    check: Predicate<V>,
}

impl<V> Rule<V> {
    /// Create a rule from a predicate.
    ///
    /// The predicate returns `true` when the value passes.
    pub fn new<P>(kind: RuleKind, message: impl Into<String>, check: P) -> Self
    where
        P: Fn(&V) -> bool + Send + Sync + 'static,
    {
        Self {
            kind,
            message: message.into(),
            check: Box::new(check),
        }
    }

    /// The kind reported when this rule fails.
    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    /// The message reported when this rule fails.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Check a value against this rule.
    pub fn check(&self, value: &V) -> bool {
        (self.check)(value)
    }
}

impl<V> std::fmt::Debug for Rule<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("kind", &self.kind)
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}
