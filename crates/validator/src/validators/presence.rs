//! Presence validators for form values
//!
//! Form values arrive as `serde_json::Value`. A value is *present* unless it
//! is `null`, an empty string or an empty collection (array or object).
//! `false` and `0` are present: a switch that is off still has a value.
//!
//! # Examples
//!
//! ```
//! use billform_validator::foundation::Validate;
//! use billform_validator::validators::{non_empty_array, required};
//! use serde_json::json;
//!
//! assert!(required().validate(&json!("INV-000001")).is_ok());
//! assert!(required().validate(&json!("")).is_err());
//!
//! assert!(non_empty_array().validate(&json!(["admin"])).is_ok());
//! assert!(non_empty_array().validate(&json!([])).is_err());
//! ```

use serde_json::Value;

use crate::foundation::ValidationError;

/// Returns `true` when the value counts as missing.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

crate::validator! {
    /// Validates that a form value is present.
    pub Required for Value;
    rule(input) { !is_blank(input) }
    error(input) { ValidationError::required() }
    fn required();
}

crate::validator! {
    /// Validates that a form value is an array with at least one element.
    ///
    /// Unlike [`Required`] this rejects scalars: a multi-choice value must
    /// be a collection.
    pub NonEmptyArray for Value;
    rule(input) { input.as_array().is_some_and(|items| !items.is_empty()) }
    error(input) { ValidationError::new("non_empty_array", "Select at least one item") }
    fn non_empty_array();
}
