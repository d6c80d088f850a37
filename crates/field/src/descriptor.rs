//! Field descriptors: the static configuration of one custom field.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FieldConfigError;
use crate::kind::FieldType;

/// Configuration of a custom field: type, label and constraints.
///
/// Descriptors are owned by the form configuration. Nothing in this crate
/// mutates one after it has been built.
///
/// # Examples
///
/// ```
/// use billform_field::{FieldDescriptor, FieldType};
///
/// let terms = FieldDescriptor::new(FieldType::Dropdown)
///     .with_label("Payment terms")
///     .with_options(["Net 15", "Net 30"])
///     .required();
///
/// assert!(terms.is_required);
/// assert_eq!(terms.options.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDescriptor {
    #[serde(rename = "type")]
    pub field_type: FieldType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl FieldDescriptor {
    /// An optional, unlabelled field of the given type.
    #[must_use]
    pub fn new(field_type: FieldType) -> Self {
        Self {
            field_type,
            label: None,
            is_required: false,
            placeholder: None,
            options: Vec::new(),
        }
    }

    /// Read a descriptor from its JSON mapping.
    ///
    /// Unknown keys, unknown type names and options on types without
    /// options are all rejected.
    pub fn from_value(value: Value) -> Result<Self, FieldConfigError> {
        // Report a bad type name as such rather than as a generic serde error.
        if let Some(name) = value.get("type").and_then(Value::as_str) {
            name.parse::<FieldType>()?;
        }

        let descriptor: Self =
            serde_json::from_value(value).map_err(|e| FieldConfigError::InvalidDescriptor {
                reason: e.to_string(),
            })?;
        descriptor.check()?;
        Ok(descriptor)
    }

    /// Check the invariants serde cannot express.
    pub fn check(&self) -> Result<(), FieldConfigError> {
        if !self.options.is_empty() && !self.field_type.accepts_options() {
            return Err(FieldConfigError::OptionsNotSupported {
                field_type: self.field_type,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the field as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.is_required = true;
        self
    }

    /// Whether the required flag is actually enforced for this type.
    #[must_use]
    pub fn enforces_required(&self) -> bool {
        self.is_required && self.field_type.is_requirable()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn builder_defaults() {
        let d = FieldDescriptor::new(FieldType::Text);
        assert_eq!(d.label, None);
        assert!(!d.is_required);
        assert!(d.options.is_empty());
    }

    #[test]
    fn from_value_reads_all_keys() {
        let d = FieldDescriptor::from_value(json!({
            "type": "dropdown",
            "label": "Terms",
            "is_required": true,
            "placeholder": "Pick terms",
            "options": ["Net 15", "Net 30"]
        }))
        .unwrap();

        assert_eq!(
            d,
            FieldDescriptor::new(FieldType::Dropdown)
                .with_label("Terms")
                .with_placeholder("Pick terms")
                .with_options(["Net 15", "Net 30"])
                .required()
        );
    }

    #[test]
    fn from_value_rejects_unknown_keys() {
        let err = FieldDescriptor::from_value(json!({ "type": "TEXT", "hint": "x" })).unwrap_err();
        assert_eq!(err.code(), "FIELD_INVALID_DESCRIPTOR");
        assert!(err.to_string().contains("hint"));
    }

    #[test]
    fn from_value_rejects_unknown_types() {
        let err = FieldDescriptor::from_value(json!({ "type": "EMAIL" })).unwrap_err();
        assert_eq!(
            err,
            FieldConfigError::UnknownFieldType {
                name: "EMAIL".into()
            }
        );
    }

    #[test]
    fn from_value_requires_type() {
        let err = FieldDescriptor::from_value(json!({ "label": "Name" })).unwrap_err();
        assert_eq!(err.code(), "FIELD_INVALID_DESCRIPTOR");
    }

    #[test]
    fn options_only_on_dropdowns() {
        let err =
            FieldDescriptor::from_value(json!({ "type": "TEXT", "options": ["a"] })).unwrap_err();
        assert_eq!(
            err,
            FieldConfigError::OptionsNotSupported {
                field_type: FieldType::Text
            }
        );

        assert!(
            FieldDescriptor::from_value(json!({ "type": "TEXT", "options": [] })).is_ok()
        );
    }

    #[test]
    fn switch_never_enforces_required() {
        let d = FieldDescriptor::new(FieldType::Switch).required();
        assert!(d.is_required);
        assert!(!d.enforces_required());
    }

    #[test]
    fn serializes_with_type_key() {
        let d = FieldDescriptor::new(FieldType::DateTime).required();
        assert_eq!(
            serde_json::to_value(&d).unwrap(),
            json!({ "type": "DATETIME", "is_required": true })
        );
    }
}
