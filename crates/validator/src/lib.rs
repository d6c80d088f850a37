//! # billform-validator
//!
//! Named, ordered validation rules for invoice form values.
//!
//! ## Quick Start
//!
//! ```
//! use billform_validator::prelude::*;
//! use serde_json::json;
//!
//! let params = RuleParams::new().with_min_number(0.0);
//! let rules = RuleSet::parse(&["required", "isNumberFormat", "minNumberRequired"], &params)?;
//!
//! assert!(rules.check(&json!("10")).is_ok());
//! assert_eq!(
//!     rules.first_error(&json!("ten")).as_deref(),
//!     Some("This field must be a number.")
//! );
//! # Ok::<(), RuleError>(())
//! ```
//!
//! ## Layers
//!
//! - [`foundation`]: the [`Validate`](foundation::Validate) trait and
//!   [`ValidationError`](foundation::ValidationError).
//! - [`validators`]: typed building blocks declared with [`validator!`].
//! - [`rule`]: the closed catalogue of rule names and their parameters.
//! - [`messages`]: user-facing message templates per rule.
//! - [`engine`]: compiled [`RuleSet`](engine::RuleSet)s and the one-shot
//!   [`validate`](engine::validate) function.

#![allow(clippy::result_large_err)]

pub mod engine;
pub mod error;
pub mod foundation;
mod macros;
pub mod messages;
pub mod prelude;
pub mod rule;
pub mod validators;

pub use engine::{RuleSet, validate};
pub use error::RuleError;
pub use rule::{Rule, RuleParams};
