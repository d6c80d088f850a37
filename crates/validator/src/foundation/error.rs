//! Error type for validation failures
//!
//! A [`ValidationError`] is expected, recoverable feedback: a value did not
//! satisfy a rule. It carries a machine-readable code, a human-readable
//! message, an optional field label and the parameters the message template
//! was rendered from.
//!
//! All string fields use `Cow<'static, str>` so static codes and messages
//! never allocate.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A structured validation failure.
///
/// # Examples
///
/// ```
/// use billform_validator::foundation::ValidationError;
///
/// let error = ValidationError::new("minNumberRequired", "Tax Percent must be at least 0.")
///     .with_field("Tax Percent")
///     .with_param("min", "0");
///
/// assert_eq!(error.param("min"), Some("0"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code for programmatic handling and message lookup.
    ///
    /// Examples: "required", "invalid_format", "urlFormat"
    pub code: Cow<'static, str>,

    /// Human-readable message shown next to the failing control.
    pub message: Cow<'static, str>,

    /// Label of the field the error belongs to, if known.
    pub field: Option<Cow<'static, str>>,

    /// Parameters the message template is rendered from.
    ///
    /// Stored as ordered key-value pairs (typically 0-2 params).
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field label for this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Replaces the message, keeping code, field and params.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.message = message.into();
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates a "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates an "invalid_format" error.
    pub fn invalid_format(expected: impl Into<Cow<'static, str>>) -> Self {
        Self::new("invalid_format", "Invalid format").with_param("expected", expected)
    }

    /// Creates a "min" error for a numeric lower bound.
    pub fn below_min<T: fmt::Display>(min: T) -> Self {
        Self::new("min", format!("Must be at least {min}")).with_param("min", min.to_string())
    }

    /// Creates a "max" error for a numeric upper bound.
    pub fn above_max<T: fmt::Display>(max: T) -> Self {
        Self::new("max", format!("Must be at most {max}")).with_param("max", max.to_string())
    }

    /// Creates a "min_length" error.
    pub fn min_length(min: usize, actual: usize) -> Self {
        Self::new("min_length", format!("Must be at least {min} characters"))
            .with_param("min", min.to_string())
            .with_param("actual", actual.to_string())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_error() {
        let error = ValidationError::new("test", "Test error");
        assert_eq!(error.code, "test");
        assert_eq!(error.message, "Test error");
        assert!(error.field.is_none());
    }

    #[test]
    fn test_error_with_params() {
        let error = ValidationError::new("min", "Too small")
            .with_param("min", "5")
            .with_param("actual", "3");

        assert_eq!(error.param("min"), Some("5"));
        assert_eq!(error.param("actual"), Some("3"));
        assert_eq!(error.param("max"), None);
    }

    #[test]
    fn test_display_with_and_without_field() {
        let error = ValidationError::required();
        assert_eq!(error.to_string(), "required: This field is required");

        let error = error.with_field("Name");
        assert_eq!(error.to_string(), "[Name] required: This field is required");
    }

    #[test]
    fn test_with_message_keeps_params() {
        let error = ValidationError::below_min(0).with_message("Percent must be at least 0.");
        assert_eq!(error.code, "min");
        assert_eq!(error.param("min"), Some("0"));
        assert_eq!(error.message, "Percent must be at least 0.");
    }

    #[test]
    fn test_zero_alloc_static_strings() {
        let error = ValidationError::new("required", "This field is required");
        assert!(matches!(error.code, Cow::Borrowed(_)));
        assert!(matches!(error.message, Cow::Borrowed(_)));
    }
}
