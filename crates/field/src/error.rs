//! Form configuration errors.

use billform_validator::RuleError;

use crate::kind::FieldType;

/// Error type for field configuration.
///
/// Every variant is a developer mistake in the form configuration. None of
/// them is shown to the person filling in the form; those failures are
/// [`FieldValidationError`](crate::orchestrator::FieldValidationError)s.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldConfigError {
    /// The symbolic type name is not a known field type.
    #[error("unknown field type `{name}`")]
    UnknownFieldType { name: String },

    /// The descriptor mapping could not be read.
    #[error("invalid field descriptor: {reason}")]
    InvalidDescriptor { reason: String },

    /// `options` was given for a type that has no options.
    #[error("field type {field_type} does not take options")]
    OptionsNotSupported { field_type: FieldType },

    /// Two fields in one form share a name.
    #[error("duplicate field name `{name}`")]
    DuplicateField { name: String },

    /// A rule or message template was misconfigured.
    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl FieldConfigError {
    /// Broad error category for grouping in logs.
    #[must_use]
    pub fn category(&self) -> &str {
        match self {
            Self::UnknownFieldType { .. } => "type",
            Self::InvalidDescriptor { .. } => "descriptor",
            Self::OptionsNotSupported { .. } => "descriptor",
            Self::DuplicateField { .. } => "lookup",
            Self::Rule(_) => "rule",
        }
    }

    /// Machine-readable error code for programmatic handling.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::UnknownFieldType { .. } => "FIELD_UNKNOWN_TYPE",
            Self::InvalidDescriptor { .. } => "FIELD_INVALID_DESCRIPTOR",
            Self::OptionsNotSupported { .. } => "FIELD_OPTIONS_NOT_SUPPORTED",
            Self::DuplicateField { .. } => "FIELD_DUPLICATE",
            Self::Rule(inner) => inner.code(),
        }
    }
}
