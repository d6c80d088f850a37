//! Core validation types and traits
//!
//! - **Trait**: [`Validate`]
//! - **Error**: [`ValidationError`]
//!
//! Typed validators in [`crate::validators`] implement [`Validate`] for the
//! narrowest input they can check (`str`, `f64`, `serde_json::Value`). The
//! rule engine in [`crate::engine`] adapts form values to those inputs.

pub mod error;
pub mod traits;

pub use error::ValidationError;
pub use traits::Validate;

/// A validation result using the standard [`ValidationError`].
pub type ValidationResult<T> = Result<T, ValidationError>;
