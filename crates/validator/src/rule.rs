//! Named validation rules and their parameters.
//!
//! Forms refer to rules by name (`"required"`, `"urlFormat"`, ...) and pass a
//! parameter mapping alongside (`{"minNumber": 0, "fieldName": "Tax Percent"}`).
//! [`Rule`] is the closed catalogue of those names; [`RuleParams`] is the
//! typed parameter mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::RuleError;

/// A built-in validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rule {
    /// Value must be present (not null, empty string or empty collection).
    Required,
    /// Value must look like an email address.
    EmailFormat,
    /// Value must look like a web address.
    UrlFormat,
    /// Value must be a decimal number.
    IsNumberFormat,
    /// Numeric value must be at least `minNumber`.
    MinNumberRequired,
    /// Numeric value must be at most `maxNumber`.
    MaxNumberRequired,
    /// Text must have at least `minCharacter` characters.
    MinCharacterRequired,
    /// Value must equal the counterpart passed as `fieldName`.
    PasswordCompared,
    /// Value must be a non-empty array.
    RequiredCheckArray,
}

impl Rule {
    /// Every built-in rule, in declaration order.
    pub const ALL: [Rule; 9] = [
        Rule::Required,
        Rule::EmailFormat,
        Rule::UrlFormat,
        Rule::IsNumberFormat,
        Rule::MinNumberRequired,
        Rule::MaxNumberRequired,
        Rule::MinCharacterRequired,
        Rule::PasswordCompared,
        Rule::RequiredCheckArray,
    ];

    /// The rule's name as forms spell it.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::EmailFormat => "emailFormat",
            Self::UrlFormat => "urlFormat",
            Self::IsNumberFormat => "isNumberFormat",
            Self::MinNumberRequired => "minNumberRequired",
            Self::MaxNumberRequired => "maxNumberRequired",
            Self::MinCharacterRequired => "minCharacterRequired",
            Self::PasswordCompared => "passwordCompared",
            Self::RequiredCheckArray => "requiredCheckArray",
        }
    }

    /// The parameter this rule cannot run without, if any.
    #[must_use]
    pub fn required_param(&self) -> Option<&'static str> {
        match self {
            Self::MinNumberRequired => Some("minNumber"),
            Self::MaxNumberRequired => Some("maxNumber"),
            Self::MinCharacterRequired => Some("minCharacter"),
            Self::PasswordCompared => Some("fieldName"),
            Self::Required
            | Self::EmailFormat
            | Self::UrlFormat
            | Self::IsNumberFormat
            | Self::RequiredCheckArray => None,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Rule {
    type Err = RuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rule| rule.as_str() == s)
            .ok_or_else(|| RuleError::UnknownRule { name: s.to_owned() })
    }
}

/// Parameters shared by the rules of one field.
///
/// `field_name` doubles as the label interpolated into messages and, for
/// [`Rule::PasswordCompared`], as the counterpart value to compare against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RuleParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_number: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_number: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_character: Option<usize>,
}

impl RuleParams {
    /// Create an empty parameter set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read parameters from a JSON mapping, rejecting unknown keys.
    pub fn from_value(value: serde_json::Value) -> Result<Self, RuleError> {
        serde_json::from_value(value).map_err(|e| RuleError::InvalidParams {
            reason: e.to_string(),
        })
    }

    #[must_use]
    pub fn with_field_name(mut self, name: impl Into<String>) -> Self {
        self.field_name = Some(name.into());
        self
    }

    #[must_use]
    pub fn with_min_number(mut self, min: f64) -> Self {
        self.min_number = Some(min);
        self
    }

    #[must_use]
    pub fn with_max_number(mut self, max: f64) -> Self {
        self.max_number = Some(max);
        self
    }

    #[must_use]
    pub fn with_min_character(mut self, min: usize) -> Self {
        self.min_character = Some(min);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_str_accepts_every_name() {
        for rule in Rule::ALL {
            assert_eq!(rule.as_str().parse::<Rule>(), Ok(rule));
        }
    }

    #[test]
    fn from_str_is_exact() {
        assert!(matches!(
            "Required".parse::<Rule>(),
            Err(RuleError::UnknownRule { name }) if name == "Required"
        ));
        assert!("phoneFormat".parse::<Rule>().is_err());
        assert!("".parse::<Rule>().is_err());
    }

    #[test]
    fn as_str_matches_serde_name() {
        for rule in Rule::ALL {
            let json = serde_json::to_string(&rule).unwrap();
            assert_eq!(json, format!("\"{}\"", rule.as_str()));
        }
    }

    #[test]
    fn required_params() {
        assert_eq!(Rule::Required.required_param(), None);
        assert_eq!(Rule::MinNumberRequired.required_param(), Some("minNumber"));
        assert_eq!(Rule::PasswordCompared.required_param(), Some("fieldName"));
    }

    #[test]
    fn params_read_camel_case_mapping() {
        let params =
            RuleParams::from_value(json!({"fieldName": "Tax Percent", "minNumber": 0})).unwrap();
        assert_eq!(
            params,
            RuleParams::new()
                .with_field_name("Tax Percent")
                .with_min_number(0.0)
        );
    }

    #[test]
    fn params_reject_unknown_keys() {
        let err = RuleParams::from_value(json!({"minimum": 3})).unwrap_err();
        assert!(matches!(err, RuleError::InvalidParams { .. }));
    }
}
