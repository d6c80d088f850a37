//! Field renderer: descriptors in, control descriptions out.
//!
//! A [`Control`] is what the surrounding form library binds to: the widget
//! to draw, its presentation flags and the rules to run on blur. Rendering
//! never fails and never mutates the descriptor.

use std::collections::BTreeMap;
use std::sync::Arc;

use billform_validator::messages::MessageCatalog;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::error::FieldConfigError;
use crate::kind::FieldType;
use crate::option::SelectItem;
use crate::registry::{self, FieldRules, Keyboard, PickerMode, RenderStrategy};

/// Default character cap for multi-line inputs.
pub const TEXTAREA_MAX_LENGTH: usize = 255;

/// Default label of a dropdown's empty entry.
pub const DROPDOWN_PLACEHOLDER: &str = "Select an item...";

/// Renderer-wide settings shared by every control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderSettings {
    pub textarea_max_length: usize,
    pub dropdown_placeholder: String,
}

impl Default for RenderSettings {
    fn default() -> Self {
        Self {
            textarea_max_length: TEXTAREA_MAX_LENGTH,
            dropdown_placeholder: DROPDOWN_PLACEHOLDER.to_owned(),
        }
    }
}

/// The concrete widget a control draws.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Widget {
    Input {
        keyboard: Keyboard,
        multiline: bool,
        #[serde(skip_serializing_if = "Option::is_none")]
        max_length: Option<usize>,
    },
    Picker {
        mode: PickerMode,
    },
    Dropdown {
        placeholder: SelectItem,
        items: Vec<SelectItem>,
    },
    Toggle,
}

/// A rendered control bound to its field name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Control {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub widget: Widget,
    pub rules: FieldRules,
}

impl Control {
    /// Blur-time validation: the message the form would show for `value`.
    #[must_use]
    pub fn validate(&self, value: &Value) -> Option<String> {
        self.rules.check(value)
    }

    /// Whether the user can interact with the control.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        !self.disabled
    }
}

/// Renders descriptors with shared settings and message templates.
#[derive(Debug, Clone, Default)]
pub struct FieldRenderer {
    settings: RenderSettings,
    messages: Option<Arc<MessageCatalog>>,
}

impl FieldRenderer {
    #[must_use]
    pub fn new(settings: RenderSettings) -> Self {
        Self {
            settings,
            messages: None,
        }
    }

    /// Use a custom message catalog for bound rules.
    #[must_use]
    pub fn with_messages(mut self, messages: Arc<MessageCatalog>) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Override message templates by rule name.
    pub fn with_message_overrides(
        self,
        overrides: &BTreeMap<String, String>,
    ) -> Result<Self, FieldConfigError> {
        if overrides.is_empty() {
            return Ok(self);
        }
        let catalog = MessageCatalog::with_overrides(overrides)?;
        Ok(self.with_messages(Arc::new(catalog)))
    }

    #[must_use]
    pub fn settings(&self) -> &RenderSettings {
        &self.settings
    }

    /// The catalog bound rules render messages from.
    #[must_use]
    pub fn messages(&self) -> Arc<MessageCatalog> {
        self.messages.clone().unwrap_or_else(MessageCatalog::shared)
    }

    /// Render one descriptor as a control named `name`.
    #[must_use]
    pub fn render(&self, descriptor: &FieldDescriptor, name: &str, disabled: bool) -> Control {
        let widget = self.widget(descriptor);
        tracing::trace!(name, field_type = %descriptor.field_type, disabled, "rendered control");

        Control {
            name: name.to_owned(),
            field_type: descriptor.field_type,
            label: descriptor.label.clone(),
            placeholder: descriptor.placeholder.clone(),
            required: descriptor.enforces_required(),
            disabled,
            widget,
            rules: FieldRules::with_messages(descriptor, self.messages()),
        }
    }

    fn widget(&self, descriptor: &FieldDescriptor) -> Widget {
        match registry::resolve(descriptor.field_type) {
            RenderStrategy::Input { keyboard } => Widget::Input {
                keyboard,
                multiline: false,
                max_length: None,
            },
            RenderStrategy::Multiline => Widget::Input {
                keyboard: Keyboard::Default,
                multiline: true,
                max_length: Some(self.settings.textarea_max_length),
            },
            RenderStrategy::Picker { mode } => Widget::Picker { mode },
            RenderStrategy::Dropdown => {
                let label = descriptor
                    .placeholder
                    .as_deref()
                    .unwrap_or(&self.settings.dropdown_placeholder);
                Widget::Dropdown {
                    placeholder: SelectItem::placeholder(label),
                    items: descriptor.options.iter().map(SelectItem::option).collect(),
                }
            }
            RenderStrategy::Toggle => Widget::Toggle,
        }
    }
}

/// Render with default settings.
#[must_use]
pub fn render(descriptor: &FieldDescriptor, name: &str, disabled: bool) -> Control {
    FieldRenderer::default().render(descriptor, name, disabled)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_dropdown_has_only_placeholder() {
        let control = render(&FieldDescriptor::new(FieldType::Dropdown), "terms", false);
        assert_eq!(
            control.widget,
            Widget::Dropdown {
                placeholder: SelectItem::placeholder("Select an item..."),
                items: Vec::new(),
            }
        );
    }

    #[test]
    fn dropdown_uses_descriptor_placeholder() {
        let descriptor = FieldDescriptor::new(FieldType::Dropdown)
            .with_placeholder("Choose terms")
            .with_options(["Net 15", "Net 30"]);
        let control = render(&descriptor, "terms", false);

        let Widget::Dropdown { placeholder, items } = control.widget else {
            panic!("expected dropdown");
        };
        assert_eq!(placeholder.label, "Choose terms");
        assert_eq!(placeholder.value, None);
        assert_eq!(items, vec![SelectItem::option("Net 15"), SelectItem::option("Net 30")]);
    }

    #[test]
    fn textarea_is_capped_and_multiline() {
        let control = render(&FieldDescriptor::new(FieldType::Textarea), "notes", false);
        assert_eq!(
            control.widget,
            Widget::Input {
                keyboard: Keyboard::Default,
                multiline: true,
                max_length: Some(255),
            }
        );

        let renderer = FieldRenderer::new(RenderSettings {
            textarea_max_length: 1000,
            ..RenderSettings::default()
        });
        let control = renderer.render(&FieldDescriptor::new(FieldType::Textarea), "notes", false);
        assert!(matches!(
            control.widget,
            Widget::Input {
                max_length: Some(1000),
                ..
            }
        ));
    }

    #[test]
    fn number_gets_decimal_keyboard() {
        let control = render(&FieldDescriptor::new(FieldType::Number), "qty", false);
        assert_eq!(
            control.widget,
            Widget::Input {
                keyboard: Keyboard::Decimal,
                multiline: false,
                max_length: None,
            }
        );
    }

    #[test]
    fn switch_accepts_required_without_enforcing() {
        let control = render(
            &FieldDescriptor::new(FieldType::Switch).required(),
            "paid",
            false,
        );
        assert_eq!(control.widget, Widget::Toggle);
        assert!(!control.required);
        assert_eq!(control.validate(&json!(null)), None);
    }

    #[test]
    fn disabled_is_propagated() {
        for ty in FieldType::ALL {
            let control = render(&FieldDescriptor::new(ty), "f", true);
            assert!(control.disabled, "{ty}");
            assert!(!control.is_interactive());
        }
    }

    #[test]
    fn blur_validation_uses_bound_rules() {
        let control = render(&FieldDescriptor::new(FieldType::Url).required(), "site", false);
        assert_eq!(
            control.validate(&json!("not-a-url")).as_deref(),
            Some("This field must be a valid URL.")
        );
        assert_eq!(control.validate(&json!("https://example.com")), None);
    }

    #[test]
    fn message_overrides_reach_controls() {
        let overrides = BTreeMap::from([("required".to_owned(), "Please fill in".to_owned())]);
        let renderer = FieldRenderer::default()
            .with_message_overrides(&overrides)
            .unwrap();
        let control = renderer.render(&FieldDescriptor::new(FieldType::Text).required(), "n", false);
        assert_eq!(control.validate(&json!("")).as_deref(), Some("Please fill in"));
    }

    #[test]
    fn bad_override_is_a_config_error() {
        let overrides = BTreeMap::from([("requird".to_owned(), "x".to_owned())]);
        let err = FieldRenderer::default()
            .with_message_overrides(&overrides)
            .unwrap_err();
        assert_eq!(err.code(), "RULE_UNKNOWN");
    }

    #[test]
    fn serializes_control_description() {
        let control = render(
            &FieldDescriptor::new(FieldType::Date).with_label("Due").required(),
            "due",
            false,
        );
        assert_eq!(
            serde_json::to_value(&control).unwrap(),
            json!({
                "name": "due",
                "type": "DATE",
                "label": "Due",
                "required": true,
                "disabled": false,
                "widget": { "kind": "picker", "mode": "date" },
                "rules": ["required"]
            })
        );
    }
}
