//! Dropdown entries.

use serde::{Deserialize, Serialize};

/// One entry in a dropdown control.
///
/// The placeholder entry has no value: picking it clears the selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectItem {
    /// Text shown to the user.
    pub label: String,

    /// The value produced when this item is picked.
    pub value: Option<String>,
}

impl SelectItem {
    /// An item whose value is its label, as configured dropdown options are.
    #[must_use]
    pub fn option(label: impl Into<String>) -> Self {
        let label = label.into();
        Self {
            value: Some(label.clone()),
            label,
        }
    }

    /// An item that selects nothing.
    #[must_use]
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    /// Whether picking this item clears the selection.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}
