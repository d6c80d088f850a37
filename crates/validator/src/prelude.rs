//! Prelude module for convenient imports.
//!
//! `use billform_validator::prelude::*;` brings in the traits, rule types and
//! built-in validators most callers need.

pub use crate::engine::{RuleSet, as_number, as_text, validate};
pub use crate::error::RuleError;
pub use crate::foundation::{Validate, ValidationError, ValidationResult};
pub use crate::messages::{DEFAULT_FIELD_LABEL, MessageCatalog};
pub use crate::rule::{Rule, RuleParams};

#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;
