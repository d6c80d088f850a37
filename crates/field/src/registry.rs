//! Field type registry.
//!
//! Maps each [`FieldType`] to the control it renders as and the rules its
//! values are checked against. Lookup is an exhaustive `match`, so a new
//! field type does not compile until it has an entry here.

use std::sync::Arc;

use billform_validator::messages::MessageCatalog;
use billform_validator::validators::is_blank;
use billform_validator::{Rule, RuleSet};
use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::descriptor::FieldDescriptor;
use crate::error::FieldConfigError;
use crate::kind::FieldType;

/// On-screen keyboard an input control asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Keyboard {
    Default,
    Decimal,
    Phone,
    Url,
}

/// What a date/time picker selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PickerMode {
    Date,
    Time,
    DateTime,
}

/// How a field type is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum RenderStrategy {
    /// Single-line text input.
    Input { keyboard: Keyboard },
    /// Multi-line text input with a length cap.
    Multiline,
    /// Date and/or time picker.
    Picker { mode: PickerMode },
    /// Single choice from configured options.
    Dropdown,
    /// On/off switch.
    Toggle,
}

/// The render strategy for a field type.
#[must_use]
pub fn resolve(field_type: FieldType) -> RenderStrategy {
    match field_type {
        FieldType::Text => RenderStrategy::Input {
            keyboard: Keyboard::Default,
        },
        FieldType::Number => RenderStrategy::Input {
            keyboard: Keyboard::Decimal,
        },
        FieldType::Phone => RenderStrategy::Input {
            keyboard: Keyboard::Phone,
        },
        FieldType::Url => RenderStrategy::Input {
            keyboard: Keyboard::Url,
        },
        FieldType::Textarea => RenderStrategy::Multiline,
        FieldType::Switch => RenderStrategy::Toggle,
        FieldType::Date => RenderStrategy::Picker {
            mode: PickerMode::Date,
        },
        FieldType::Time => RenderStrategy::Picker {
            mode: PickerMode::Time,
        },
        FieldType::DateTime => RenderStrategy::Picker {
            mode: PickerMode::DateTime,
        },
        FieldType::Dropdown => RenderStrategy::Dropdown,
    }
}

/// The render strategy for a symbolic type name.
pub fn resolve_name(name: &str) -> Result<RenderStrategy, FieldConfigError> {
    Ok(resolve(name.parse()?))
}

/// Rules applied to a required field of this type.
#[must_use]
pub fn default_rules(field_type: FieldType) -> &'static [Rule] {
    match field_type {
        FieldType::Switch => &[],
        FieldType::Url => &[Rule::Required, Rule::UrlFormat],
        FieldType::Number => &[Rule::Required, Rule::IsNumberFormat],
        FieldType::Text
        | FieldType::Phone
        | FieldType::Textarea
        | FieldType::Date
        | FieldType::Time
        | FieldType::DateTime
        | FieldType::Dropdown => &[Rule::Required],
    }
}

/// Format rule a type carries even when the field is optional.
#[must_use]
pub fn format_rule(field_type: FieldType) -> Option<Rule> {
    match field_type {
        FieldType::Url => Some(Rule::UrlFormat),
        FieldType::Number => Some(Rule::IsNumberFormat),
        _ => None,
    }
}

// ============================================================================
// FIELD RULES
// ============================================================================

/// The rules bound to one field.
///
/// Required fields run their type's full default list. Optional fields run
/// only the type's format rule, and only once something has been entered.
/// Switches run nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRules {
    rules: RuleSet,
    skip_blank: bool,
}

impl FieldRules {
    /// Rules for a descriptor, with the default message catalog.
    #[must_use]
    pub fn for_descriptor(descriptor: &FieldDescriptor) -> Self {
        Self::with_messages(descriptor, MessageCatalog::shared())
    }

    /// Rules for a descriptor, rendering messages from `messages`.
    #[must_use]
    pub fn with_messages(descriptor: &FieldDescriptor, messages: Arc<MessageCatalog>) -> Self {
        let enforced = descriptor.enforces_required();
        let set = if enforced {
            RuleSet::new().required()
        } else {
            RuleSet::new()
        };
        let set = match format_rule(descriptor.field_type) {
            Some(Rule::UrlFormat) => set.url_format(),
            Some(Rule::IsNumberFormat) => set.number_format(),
            _ => set,
        };
        let skip_blank = !enforced;

        Self {
            rules: set.with_messages(messages),
            skip_blank,
        }
    }

    /// The first failing rule's message for `value`, if any.
    #[must_use]
    pub fn check(&self, value: &Value) -> Option<String> {
        if self.skip_blank && is_blank(value) {
            return None;
        }
        self.rules.first_error(value)
    }

    /// The bound rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.rules.rules()
    }

    /// Whether no rule applies.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Serialize for FieldRules {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.rules.serialize(serializer)
    }
}
