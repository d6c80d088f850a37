//! Configuration errors raised while building rule sets.
//!
//! These are developer mistakes (a misspelled rule name, a bound rule with
//! no bound) and are surfaced immediately instead of being skipped. They are
//! distinct from [`ValidationError`](crate::foundation::ValidationError),
//! which reports bad user input.

use crate::rule::Rule;

/// Error type for rule configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// The rule name is not one of the built-in rules.
    #[error("unknown validation rule `{name}`")]
    UnknownRule { name: String },

    /// A parameterized rule was configured without its parameter.
    #[error("rule `{rule}` requires parameter `{param}`")]
    MissingParam { rule: Rule, param: &'static str },

    /// The rule parameter mapping could not be read.
    #[error("invalid rule parameters: {reason}")]
    InvalidParams { reason: String },
}

impl RuleError {
    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::UnknownRule { .. } => "RULE_UNKNOWN",
            Self::MissingParam { .. } => "RULE_MISSING_PARAM",
            Self::InvalidParams { .. } => "RULE_INVALID_PARAMS",
        }
    }
}
