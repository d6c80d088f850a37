//! The rule engine: ordered, short-circuiting evaluation of named rules
//! against form values.
//!
//! A [`RuleSet`] is compiled once from rule names and parameters. Compiling
//! is where configuration mistakes surface ([`RuleError`]); checking a value
//! never fails for configuration reasons and reports at most one
//! [`ValidationError`], the first rule that did not pass.
//!
//! # Examples
//!
//! ```
//! use billform_validator::engine::{RuleSet, validate};
//! use billform_validator::rule::RuleParams;
//! use serde_json::json;
//!
//! let rules = RuleSet::new().required().number_format();
//! assert!(rules.check(&json!("12.50")).is_ok());
//!
//! let err = rules.check(&json!("")).unwrap_err();
//! assert_eq!(err.code, "required");
//!
//! let message = validate(
//!     &json!("-1"),
//!     &["required", "minNumberRequired"],
//!     &RuleParams::new().with_min_number(0.0).with_field_name("Tax Percent"),
//! )
//! .unwrap();
//! assert_eq!(message.as_deref(), Some("Tax Percent must be at least 0."));
//! ```

use std::borrow::Cow;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::Value;

use crate::error::RuleError;
use crate::foundation::{Validate, ValidationError};
use crate::messages::MessageCatalog;
use crate::rule::{Rule, RuleParams};
use crate::validators::{
    DecimalFormat, Email, Matches, MaxNumber, MinLength, MinNumber, NonEmptyArray, Required, Url,
    parse_decimal,
};

// ============================================================================
// VALUE COERCION
// ============================================================================

/// Text form of a value as string rules see it.
///
/// `null` reads as the empty string; numbers and booleans use their literal
/// spelling; collections use their JSON text.
#[must_use]
pub fn as_text(value: &Value) -> Cow<'_, str> {
    match value {
        Value::String(s) => Cow::Borrowed(s),
        Value::Null => Cow::Borrowed(""),
        other => Cow::Owned(other.to_string()),
    }
}

/// Numeric form of a value, if it has one.
#[must_use]
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_decimal(s),
        _ => None,
    }
}

// ============================================================================
// COMPILED CHECKS
// ============================================================================

#[derive(Debug, Clone)]
enum Check {
    Required(Required),
    Email(Email),
    Url(Url),
    Number(DecimalFormat),
    MinNumber(MinNumber),
    MaxNumber(MaxNumber),
    MinCharacter(MinLength),
    Compared(Matches),
    NonEmptyArray(NonEmptyArray),
}

impl Check {
    fn compile(rule: Rule, params: &RuleParams) -> Result<Self, RuleError> {
        let missing = || RuleError::MissingParam {
            rule,
            param: rule.required_param().unwrap_or_default(),
        };

        Ok(match rule {
            Rule::Required => Self::Required(Required),
            Rule::EmailFormat => Self::Email(Email::new()),
            Rule::UrlFormat => Self::Url(Url::new()),
            Rule::IsNumberFormat => Self::Number(DecimalFormat),
            Rule::MinNumberRequired => {
                Self::MinNumber(MinNumber::new(params.min_number.ok_or_else(missing)?))
            }
            Rule::MaxNumberRequired => {
                Self::MaxNumber(MaxNumber::new(params.max_number.ok_or_else(missing)?))
            }
            Rule::MinCharacterRequired => {
                Self::MinCharacter(MinLength::new(params.min_character.ok_or_else(missing)?))
            }
            Rule::PasswordCompared => Self::Compared(Matches::new(
                params.field_name.clone().ok_or_else(missing)?,
            )),
            Rule::RequiredCheckArray => Self::NonEmptyArray(NonEmptyArray),
        })
    }

    fn run(&self, value: &Value) -> Result<(), ValidationError> {
        match self {
            Self::Required(v) => v.validate(value),
            Self::NonEmptyArray(v) => v.validate(value),
            Self::Email(v) => v.validate(&as_text(value)),
            Self::Url(v) => v.validate(&as_text(value)),
            Self::MinCharacter(v) => v.validate(&as_text(value)),
            Self::Compared(v) => v.validate(&as_text(value)),
            Self::Number(v) => match value {
                Value::Number(_) => Ok(()),
                other => v.validate(&as_text(other)),
            },
            Self::MinNumber(v) => match as_number(value) {
                Some(n) => v.validate(&n),
                None => Err(ValidationError::below_min(v.min)),
            },
            Self::MaxNumber(v) => match as_number(value) {
                Some(n) => v.validate(&n),
                None => Err(ValidationError::above_max(v.max)),
            },
        }
    }
}

// ============================================================================
// RULE SET
// ============================================================================

/// An ordered, compiled list of rules for one field.
#[derive(Debug, Clone)]
pub struct RuleSet {
    checks: Vec<(Rule, Check)>,
    field_name: Option<String>,
    messages: Arc<MessageCatalog>,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RuleSet {
    fn eq(&self, other: &Self) -> bool {
        self.field_name == other.field_name && self.rules().eq(other.rules())
    }
}

impl Serialize for RuleSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.rules())
    }
}

impl RuleSet {
    /// An empty rule set; every value passes.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checks: Vec::new(),
            field_name: None,
            messages: MessageCatalog::shared(),
        }
    }

    /// Compile an ordered rule list.
    ///
    /// Fails if a rule needs a parameter that `params` does not supply.
    pub fn compile(rules: &[Rule], params: &RuleParams) -> Result<Self, RuleError> {
        let checks = rules
            .iter()
            .map(|&rule| Check::compile(rule, params).map(|check| (rule, check)))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            checks,
            field_name: params.field_name.clone(),
            messages: MessageCatalog::shared(),
        })
    }

    /// Compile an ordered list of rule names.
    ///
    /// An unrecognized name fails immediately; it is never skipped.
    pub fn parse<S: AsRef<str>>(names: &[S], params: &RuleParams) -> Result<Self, RuleError> {
        let rules = names
            .iter()
            .map(|name| name.as_ref().parse::<Rule>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::compile(&rules, params)
    }

    /// Use a different message catalog.
    #[must_use]
    pub fn with_messages(mut self, messages: Arc<MessageCatalog>) -> Self {
        self.messages = messages;
        self
    }

    /// Set the label interpolated into messages.
    #[must_use]
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    /// Append `required`.
    #[must_use]
    pub fn required(self) -> Self {
        self.push(Rule::Required, Check::Required(Required))
    }

    /// Append `emailFormat`.
    #[must_use]
    pub fn email_format(self) -> Self {
        self.push(Rule::EmailFormat, Check::Email(Email::new()))
    }

    /// Append `urlFormat`.
    #[must_use]
    pub fn url_format(self) -> Self {
        self.push(Rule::UrlFormat, Check::Url(Url::new()))
    }

    /// Append `isNumberFormat`.
    #[must_use]
    pub fn number_format(self) -> Self {
        self.push(Rule::IsNumberFormat, Check::Number(DecimalFormat))
    }

    /// Append `minNumberRequired` with the given bound.
    #[must_use]
    pub fn min_number(self, min: f64) -> Self {
        self.push(Rule::MinNumberRequired, Check::MinNumber(MinNumber::new(min)))
    }

    /// Append `maxNumberRequired` with the given bound.
    #[must_use]
    pub fn max_number(self, max: f64) -> Self {
        self.push(Rule::MaxNumberRequired, Check::MaxNumber(MaxNumber::new(max)))
    }

    /// Append `minCharacterRequired` with the given length.
    #[must_use]
    pub fn min_character(self, min: usize) -> Self {
        self.push(
            Rule::MinCharacterRequired,
            Check::MinCharacter(MinLength::new(min)),
        )
    }

    /// Append `requiredCheckArray`.
    #[must_use]
    pub fn non_empty_array(self) -> Self {
        self.push(Rule::RequiredCheckArray, Check::NonEmptyArray(NonEmptyArray))
    }

    fn push(mut self, rule: Rule, check: Check) -> Self {
        self.checks.push((rule, check));
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> impl Iterator<Item = Rule> + '_ {
        self.checks.iter().map(|(rule, _)| *rule)
    }

    /// Number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether the set has no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Check a value, stopping at the first failing rule.
    ///
    /// The returned error's `code` is the rule name and its `message` is the
    /// rendered template.
    pub fn check(&self, value: &Value) -> Result<(), ValidationError> {
        self.checks.iter().try_for_each(|(rule, check)| {
            check
                .run(value)
                .map_err(|error| self.describe(*rule, error))
        })
    }

    /// The first failing rule's message, if any.
    #[must_use]
    pub fn first_error(&self, value: &Value) -> Option<String> {
        self.check(value).err().map(|e| e.message.into_owned())
    }

    fn describe(&self, rule: Rule, error: ValidationError) -> ValidationError {
        // The compared rule's parameter is the counterpart value, never a label.
        let label = match rule {
            Rule::PasswordCompared => None,
            _ => self.field_name.as_deref(),
        };
        tracing::trace!(rule = %rule, code = %error.code, "rule failed");

        let message = self.messages.render(rule, &error, label);
        let mut described = ValidationError::new(rule.as_str(), message);
        described.params = error.params;
        if let Some(label) = label {
            described = described.with_field(label.to_owned());
        }
        described
    }
}

/// Validate one value against named rules.
///
/// Returns `Ok(None)` when every rule passes, `Ok(Some(message))` for the
/// first failure, and `Err` when the rule configuration itself is invalid.
pub fn validate<S: AsRef<str>>(
    value: &Value,
    rules: &[S],
    params: &RuleParams,
) -> Result<Option<String>, RuleError> {
    Ok(RuleSet::parse(rules, params)?.first_error(value))
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_set_accepts_everything() {
        let rules = RuleSet::new();
        assert!(rules.is_empty());
        assert!(rules.check(&json!(null)).is_ok());
    }

    #[test]
    fn first_failure_wins() {
        let rules = RuleSet::new().required().number_format();

        let err = rules.check(&json!("")).unwrap_err();
        assert_eq!(err.code, "required");

        let err = rules.check(&json!("abc")).unwrap_err();
        assert_eq!(err.code, "isNumberFormat");
        assert_eq!(err.message, "This field must be a number.");
    }

    #[test]
    fn json_numbers_are_numbers() {
        let rules = RuleSet::new().number_format();
        assert!(rules.check(&json!(12)).is_ok());
        assert!(rules.check(&json!(1e20)).is_ok());
        assert!(rules.check(&json!(true)).is_err());
    }

    #[test]
    fn numeric_bounds_read_strings_and_numbers() {
        let rules = RuleSet::new().min_number(0.0).max_number(100.0);
        assert!(rules.check(&json!("18")).is_ok());
        assert!(rules.check(&json!(100)).is_ok());
        assert_eq!(
            rules.check(&json!(-1)).unwrap_err().code,
            "minNumberRequired"
        );
        assert_eq!(
            rules.check(&json!("100.5")).unwrap_err().code,
            "maxNumberRequired"
        );
    }

    #[test]
    fn numeric_bounds_reject_non_numbers() {
        let rules = RuleSet::new().min_number(0.0);
        let err = rules.check(&json!("abc")).unwrap_err();
        assert_eq!(err.code, "minNumberRequired");
        assert_eq!(err.message, "This field must be at least 0.");
    }

    #[test]
    fn field_name_is_interpolated() {
        let params = RuleParams::new().with_field_name("Website");
        let rules = RuleSet::compile(&[Rule::Required, Rule::UrlFormat], &params).unwrap();

        let err = rules.check(&json!("not-a-url")).unwrap_err();
        assert_eq!(err.code, "urlFormat");
        assert_eq!(err.message, "Website must be a valid URL.");
        assert_eq!(err.field.as_deref(), Some("Website"));
    }

    #[test]
    fn compared_value_never_reaches_message() {
        let params = RuleParams::new().with_field_name("s3cret-pass");
        let rules = RuleSet::compile(&[Rule::PasswordCompared], &params).unwrap();

        assert!(rules.check(&json!("s3cret-pass")).is_ok());

        let err = rules.check(&json!("other")).unwrap_err();
        assert_eq!(err.message, "Passwords do not match.");
        assert!(err.field.is_none());
        assert!(!err.to_string().contains("s3cret-pass"));
    }

    #[test]
    fn min_character_counts_text() {
        let params = RuleParams::new().with_min_character(8);
        let rules = RuleSet::compile(&[Rule::MinCharacterRequired], &params).unwrap();
        assert!(rules.check(&json!("password")).is_ok());

        let err = rules.check(&json!("pass")).unwrap_err();
        assert_eq!(err.message, "This field must contain at least 8 characters.");
        assert_eq!(err.param("actual"), Some("4"));
    }

    #[test]
    fn check_array_is_distinct_from_required() {
        let rules = RuleSet::new().non_empty_array();
        assert!(rules.check(&json!(["admin"])).is_ok());
        assert!(rules.check(&json!([])).is_err());
        assert!(rules.check(&json!("admin")).is_err());
    }

    #[test]
    fn email_format() {
        let rules = RuleSet::new().required().email_format();
        assert!(rules.check(&json!("billing@example.com")).is_ok());
        assert_eq!(
            rules.check(&json!("billing")).unwrap_err().message,
            "This field must be a valid email address."
        );
    }

    #[test]
    fn missing_params_fail_at_compile_time() {
        let err = RuleSet::compile(&[Rule::MinNumberRequired], &RuleParams::new()).unwrap_err();
        assert_eq!(
            err,
            RuleError::MissingParam {
                rule: Rule::MinNumberRequired,
                param: "minNumber"
            }
        );

        let err = RuleSet::compile(&[Rule::PasswordCompared], &RuleParams::new()).unwrap_err();
        assert!(matches!(err, RuleError::MissingParam { param: "fieldName", .. }));
    }

    #[test]
    fn unknown_rule_names_fail_fast() {
        let err = RuleSet::parse(&["required", "phoneFormat"], &RuleParams::new()).unwrap_err();
        assert_eq!(
            err,
            RuleError::UnknownRule {
                name: "phoneFormat".into()
            }
        );
    }

    #[test]
    fn validate_returns_message_or_none() {
        let params = RuleParams::new();
        assert_eq!(validate(&json!("x"), &["required"], &params), Ok(None));
        assert_eq!(
            validate(&json!(null), &["required"], &params),
            Ok(Some("This field is required.".to_owned()))
        );
    }

    #[test]
    fn custom_catalog_is_used() {
        let catalog = MessageCatalog::with_overrides([("required", "Fill in {field}")]).unwrap();
        let rules = RuleSet::new()
            .required()
            .with_field_name("Name")
            .with_messages(Arc::new(catalog));
        assert_eq!(rules.first_error(&json!("")).as_deref(), Some("Fill in Name"));
    }

    #[test]
    fn serializes_as_rule_names() {
        let rules = RuleSet::new().required().url_format();
        assert_eq!(
            serde_json::to_value(&rules).unwrap(),
            json!(["required", "urlFormat"])
        );
    }

    #[test]
    fn as_text_coercion() {
        assert_eq!(as_text(&json!(null)), "");
        assert_eq!(as_text(&json!("a")), "a");
        assert_eq!(as_text(&json!(12)), "12");
        assert_eq!(as_text(&json!(false)), "false");
    }
}
