//! Form documents: named field descriptors plus their current values.
//!
//! The JSON shape is
//!
//! ```json
//! {
//!   "fields": [
//!     { "name": "website", "type": "URL", "label": "Website", "is_required": true }
//!   ],
//!   "values": { "website": "https://example.com" }
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::error::FieldConfigError;
use crate::instance::FieldInstance;
use crate::orchestrator::{FieldErrors, FormValidator};
use crate::render::{Control, FieldRenderer};
use crate::values::FieldValues;

/// A descriptor under the name its value is stored by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormField {
    pub name: String,
    #[serde(flatten)]
    pub descriptor: FieldDescriptor,
}

impl FormField {
    #[must_use]
    pub fn new(name: impl Into<String>, descriptor: FieldDescriptor) -> Self {
        Self {
            name: name.into(),
            descriptor,
        }
    }

    /// Read a field from its JSON mapping: `name` plus descriptor keys.
    pub fn from_value(value: Value) -> Result<Self, FieldConfigError> {
        let mut map = match value {
            Value::Object(map) => map,
            other => {
                return Err(invalid(format!("field must be an object, got {other}")));
            }
        };

        let name = match map.remove("name") {
            Some(Value::String(name)) if !name.is_empty() => name,
            Some(_) => return Err(invalid("`name` must be a non-empty string")),
            None => return Err(invalid("missing `name`")),
        };

        let descriptor = FieldDescriptor::from_value(Value::Object(map))?;
        Ok(Self { name, descriptor })
    }
}

fn invalid(reason: impl Into<String>) -> FieldConfigError {
    FieldConfigError::InvalidDescriptor {
        reason: reason.into(),
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDocument {
    #[serde(default)]
    fields: Vec<Value>,
    #[serde(default)]
    values: FieldValues,
}

impl TryFrom<RawDocument> for FormDocument {
    type Error = FieldConfigError;

    fn try_from(raw: RawDocument) -> Result<Self, Self::Error> {
        let mut document = Self::new();
        for field in raw.fields {
            document.push(FormField::from_value(field)?)?;
        }
        document.values = raw.values;
        Ok(document)
    }
}

/// An ordered list of named fields and the values entered so far.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawDocument")]
pub struct FormDocument {
    fields: Vec<FormField>,
    #[serde(skip_serializing_if = "FieldValues::is_empty")]
    values: FieldValues,
}

impl FormDocument {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a document from JSON text.
    pub fn from_json(text: &str) -> Result<Self, FieldConfigError> {
        let value: Value = serde_json::from_str(text).map_err(|e| invalid(e.to_string()))?;
        Self::from_value(value)
    }

    /// Read a document from a JSON value.
    pub fn from_value(value: Value) -> Result<Self, FieldConfigError> {
        let raw: RawDocument = serde_json::from_value(value).map_err(|e| invalid(e.to_string()))?;
        Self::try_from(raw)
    }

    /// Append a field; names must be unique within a form.
    pub fn push(&mut self, field: FormField) -> Result<&mut Self, FieldConfigError> {
        if self.fields.iter().any(|f| f.name == field.name) {
            return Err(FieldConfigError::DuplicateField { name: field.name });
        }
        self.fields.push(field);
        Ok(self)
    }

    /// Builder-style [`push`](Self::push).
    pub fn with_field(
        mut self,
        name: impl Into<String>,
        descriptor: FieldDescriptor,
    ) -> Result<Self, FieldConfigError> {
        self.push(FormField::new(name, descriptor))?;
        Ok(self)
    }

    /// Set the current value of a field.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: Value) -> Self {
        self.values.set(name, value);
        self
    }

    #[must_use]
    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[must_use]
    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut FieldValues {
        &mut self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Bind each field to its value by position; missing values are `null`.
    #[must_use]
    pub fn instances(&self) -> Vec<FieldInstance<'_>> {
        FieldInstance::bind_all(
            self.fields
                .iter()
                .map(|f| (&f.descriptor, self.values.get_or_null(&f.name))),
        )
    }

    /// Render every field.
    #[must_use]
    pub fn render(&self, renderer: &FieldRenderer, disabled: bool) -> Vec<Control> {
        self.fields
            .iter()
            .map(|f| renderer.render(&f.descriptor, &f.name, disabled))
            .collect()
    }

    /// Validate every field against its current value.
    #[must_use]
    pub fn validate(&self, validator: &FormValidator) -> FieldErrors {
        validator.validate_all(&self.instances())
    }
}
