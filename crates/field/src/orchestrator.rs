//! Whole-form validation.
//!
//! [`validate_all`] runs every field's rules and collects the failures by
//! field position. The result serializes as the sparse array form renderers
//! expect: `null` where a field passed, `{"value": message}` where it failed.

use std::collections::BTreeMap;
use std::sync::Arc;

use billform_validator::messages::MessageCatalog;
use serde::ser::{SerializeSeq, Serializer};
use serde::Serialize;

use crate::instance::FieldInstance;
use crate::registry::FieldRules;

/// Key the message is stored under in each error entry.
pub const MESSAGE_KEY: &str = "value";

/// The failure of one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldValidationError {
    #[serde(skip)]
    pub field_index: usize,
    #[serde(flatten)]
    pub messages: BTreeMap<String, String>,
}

impl FieldValidationError {
    #[must_use]
    pub fn new(field_index: usize, message: impl Into<String>) -> Self {
        Self {
            field_index,
            messages: BTreeMap::from([(MESSAGE_KEY.to_owned(), message.into())]),
        }
    }

    /// The message shown next to the control.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.messages.get(MESSAGE_KEY).map(String::as_str)
    }
}

/// Failures of a form, keyed by field index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    entries: BTreeMap<usize, FieldValidationError>,
}

impl FieldErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure; a later failure for the same index replaces it.
    pub fn insert(&mut self, error: FieldValidationError) {
        self.entries.insert(error.field_index, error);
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&FieldValidationError> {
        self.entries.get(&index)
    }

    /// The message for a field, if it failed.
    #[must_use]
    pub fn message(&self, index: usize) -> Option<&str> {
        self.get(index)?.message()
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Indices of failing fields, ascending.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidationError> {
        self.entries.values()
    }

    /// Length of the sparse array: one past the last failing index.
    #[must_use]
    pub fn sparse_len(&self) -> usize {
        self.entries.keys().next_back().map_or(0, |last| last + 1)
    }

    /// The sparse array view, with `None` holes for passing fields.
    #[must_use]
    pub fn to_sparse(&self) -> Vec<Option<&FieldValidationError>> {
        (0..self.sparse_len()).map(|i| self.get(i)).collect()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.sparse_len()))?;
        for entry in self.to_sparse() {
            seq.serialize_element(&entry)?;
        }
        seq.end()
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = &'a FieldValidationError;
    type IntoIter = std::collections::btree_map::Values<'a, usize, FieldValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// Validates whole forms against a message catalog.
#[derive(Debug, Clone)]
pub struct FormValidator {
    messages: Arc<MessageCatalog>,
}

impl Default for FormValidator {
    fn default() -> Self {
        Self::new(MessageCatalog::shared())
    }
}

impl FormValidator {
    #[must_use]
    pub fn new(messages: Arc<MessageCatalog>) -> Self {
        Self { messages }
    }

    /// Validate every field, keeping the first failure of each.
    ///
    /// Errors are keyed by each field's position in `fields`, so the
    /// result never outgrows the list and no two fields share an entry.
    /// A field whose own `index` disagrees with its position is still
    /// reported at its position.
    #[must_use]
    pub fn validate_all(&self, fields: &[FieldInstance<'_>]) -> FieldErrors {
        let mut errors = FieldErrors::new();
        if fields.is_empty() {
            return errors;
        }

        for (position, field) in fields.iter().enumerate() {
            if field.index != position {
                tracing::debug!(
                    position,
                    index = field.index,
                    "field index does not match its position"
                );
            }
            let rules = FieldRules::with_messages(field.descriptor, Arc::clone(&self.messages));
            if let Some(message) = rules.check(field.value) {
                tracing::trace!(
                    index = position,
                    field_type = %field.descriptor.field_type,
                    "field failed validation"
                );
                errors.insert(FieldValidationError::new(position, message));
            }
        }

        tracing::debug!(
            fields = fields.len(),
            errors = errors.len(),
            "validated form fields"
        );
        errors
    }
}

/// Validate every field with the default message catalog.
#[must_use]
pub fn validate_all(fields: &[FieldInstance<'_>]) -> FieldErrors {
    FormValidator::default().validate_all(fields)
}
