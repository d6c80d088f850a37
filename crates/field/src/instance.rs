//! Descriptors bound to live values for one validation pass.

use serde_json::Value;

use crate::descriptor::FieldDescriptor;

/// A descriptor bound to its current value and its position in the form.
///
/// Validation reports errors by position in the instance list; `index`
/// records where the field sits in its form.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldInstance<'a> {
    pub index: usize,
    pub descriptor: &'a FieldDescriptor,
    pub value: &'a Value,
}

impl<'a> FieldInstance<'a> {
    #[must_use]
    pub fn new(index: usize, descriptor: &'a FieldDescriptor, value: &'a Value) -> Self {
        Self {
            index,
            descriptor,
            value,
        }
    }

    /// Bind descriptor/value pairs, indexing them by position.
    pub fn bind_all<I>(pairs: I) -> Vec<Self>
    where
        I: IntoIterator<Item = (&'a FieldDescriptor, &'a Value)>,
    {
        pairs
            .into_iter()
            .enumerate()
            .map(|(index, (descriptor, value))| Self::new(index, descriptor, value))
            .collect()
    }
}
