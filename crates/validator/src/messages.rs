//! Message templates for rule failures.
//!
//! Templates use `{field}` for the field label and `{name}` for any
//! parameter the failing validator attached (`{min}`, `{max}`, ...).
//! When no label is supplied `{field}` becomes the generic label.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock};

use crate::error::RuleError;
use crate::foundation::ValidationError;
use crate::rule::Rule;

/// Label used when a rule has no `fieldName`.
pub const DEFAULT_FIELD_LABEL: &str = "This field";

static DEFAULT_CATALOG: LazyLock<Arc<MessageCatalog>> =
    LazyLock::new(|| Arc::new(MessageCatalog::default()));

/// Rule code to message template lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageCatalog {
    templates: HashMap<Rule, Cow<'static, str>>,
    fallback_label: Cow<'static, str>,
}

impl Default for MessageCatalog {
    fn default() -> Self {
        let templates = Rule::ALL
            .into_iter()
            .map(|rule| (rule, Cow::Borrowed(default_template(rule))))
            .collect();
        Self {
            templates,
            fallback_label: Cow::Borrowed(DEFAULT_FIELD_LABEL),
        }
    }
}

fn default_template(rule: Rule) -> &'static str {
    match rule {
        Rule::Required => "{field} is required.",
        Rule::EmailFormat => "{field} must be a valid email address.",
        Rule::UrlFormat => "{field} must be a valid URL.",
        Rule::IsNumberFormat => "{field} must be a number.",
        Rule::MinNumberRequired => "{field} must be at least {min}.",
        Rule::MaxNumberRequired => "{field} must not be greater than {max}.",
        Rule::MinCharacterRequired => "{field} must contain at least {min} characters.",
        Rule::PasswordCompared => "Passwords do not match.",
        Rule::RequiredCheckArray => "{field} must have at least one item selected.",
    }
}

impl MessageCatalog {
    /// The process-wide default catalog.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::clone(&DEFAULT_CATALOG)
    }

    /// Build a catalog from the defaults plus overrides keyed by rule name.
    ///
    /// An override for a name that is not a rule is a configuration error.
    pub fn with_overrides<I, K, V>(overrides: I) -> Result<Self, RuleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut catalog = Self::default();
        for (name, template) in overrides {
            let rule: Rule = name.as_ref().parse()?;
            let template: String = template.into();
            catalog.set(rule, template);
        }
        Ok(catalog)
    }

    /// Replace the template for one rule.
    pub fn set(&mut self, rule: Rule, template: impl Into<Cow<'static, str>>) {
        self.templates.insert(rule, template.into());
    }

    /// Replace the label used when no field name is given.
    #[must_use]
    pub fn with_fallback_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.fallback_label = label.into();
        self
    }

    /// The template for a rule.
    #[must_use]
    pub fn template(&self, rule: Rule) -> &str {
        match self.templates.get(&rule) {
            Some(template) => template,
            None => default_template(rule),
        }
    }

    /// Render the user-facing message for a failure of `rule`.
    #[must_use]
    pub fn render(&self, rule: Rule, error: &ValidationError, field: Option<&str>) -> String {
        let label = field.unwrap_or(self.fallback_label.as_ref());
        interpolate(self.template(rule), |name| {
            if name == "field" {
                Some(label)
            } else {
                error.param(name)
            }
        })
    }
}

/// Replace every `{name}` in one pass; substituted text is never rescanned.
/// Unknown placeholders are kept as written.
fn interpolate<'a>(template: &str, lookup: impl Fn(&str) -> Option<&'a str>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                let name = &tail[1..close];
                match lookup(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&tail[..=close]),
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}
