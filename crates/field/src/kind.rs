//! Field types and the kind of value each one holds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::FieldConfigError;

/// The type of a custom field, determining its control and default rules.
///
/// The set is closed: adding a type means adding a variant, and every
/// exhaustive `match` over it (registry, renderer) has to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldType {
    Text,
    Number,
    Phone,
    Url,
    Textarea,
    Switch,
    Date,
    Time,
    DateTime,
    Dropdown,
}

/// Broad value families a field type belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Text,
    Number,
    Boolean,
    Temporal,
    Choice,
}

impl FieldType {
    /// Every field type, in declaration order.
    pub const ALL: [FieldType; 10] = [
        FieldType::Text,
        FieldType::Number,
        FieldType::Phone,
        FieldType::Url,
        FieldType::Textarea,
        FieldType::Switch,
        FieldType::Date,
        FieldType::Time,
        FieldType::DateTime,
        FieldType::Dropdown,
    ];

    /// Symbolic name used in form configuration.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "TEXT",
            Self::Number => "NUMBER",
            Self::Phone => "PHONE",
            Self::Url => "URL",
            Self::Textarea => "TEXTAREA",
            Self::Switch => "SWITCH",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::DateTime => "DATETIME",
            Self::Dropdown => "DROPDOWN",
        }
    }

    /// The value family this type produces.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Text | Self::Phone | Self::Url | Self::Textarea => ValueKind::Text,
            Self::Number => ValueKind::Number,
            Self::Switch => ValueKind::Boolean,
            Self::Date | Self::Time | Self::DateTime => ValueKind::Temporal,
            Self::Dropdown => ValueKind::Choice,
        }
    }

    /// Whether this type deals with date/time values.
    #[must_use]
    pub fn is_temporal(&self) -> bool {
        self.value_kind() == ValueKind::Temporal
    }

    /// Whether descriptors of this type may carry `options`.
    #[must_use]
    pub fn accepts_options(&self) -> bool {
        matches!(self, Self::Dropdown)
    }

    /// Whether a value of this type can be missing at all.
    ///
    /// A switch always has a value (`true` or `false`), so its required flag
    /// is accepted but never enforced.
    #[must_use]
    pub fn is_requirable(&self) -> bool {
        !matches!(self, Self::Switch)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| FieldConfigError::UnknownFieldType { name: s.to_owned() })
    }
}

impl Serialize for FieldType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for FieldType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("TEXT".parse::<FieldType>(), Ok(FieldType::Text));
        assert_eq!("text".parse::<FieldType>(), Ok(FieldType::Text));
        assert_eq!("DateTime".parse::<FieldType>(), Ok(FieldType::DateTime));
        assert_eq!("dropdown".parse::<FieldType>(), Ok(FieldType::Dropdown));
    }

    #[test]
    fn unknown_name_is_a_config_error() {
        let err = "EMAIL".parse::<FieldType>().unwrap_err();
        assert_eq!(
            err,
            FieldConfigError::UnknownFieldType {
                name: "EMAIL".into()
            }
        );
        assert!("".parse::<FieldType>().is_err());
        assert!("date_time".parse::<FieldType>().is_err());
    }

    #[test]
    fn as_str_round_trips_through_serde() {
        for ty in FieldType::ALL {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, serde_json::json!(ty.as_str()));
            let back: FieldType = serde_json::from_value(json).unwrap();
            assert_eq!(back, ty);
        }
    }

    #[test]
    fn deserialize_rejects_unknown_names() {
        let err = serde_json::from_value::<FieldType>(serde_json::json!("CHECKBOX")).unwrap_err();
        assert!(err.to_string().contains("CHECKBOX"));
    }

    #[test]
    fn classification() {
        assert!(FieldType::Date.is_temporal());
        assert!(FieldType::Time.is_temporal());
        assert!(FieldType::DateTime.is_temporal());
        assert!(!FieldType::Text.is_temporal());

        assert!(FieldType::Dropdown.accepts_options());
        assert!(!FieldType::Text.accepts_options());

        assert!(!FieldType::Switch.is_requirable());
        assert!(FieldType::Number.is_requirable());
        assert_eq!(FieldType::Switch.value_kind(), ValueKind::Boolean);
    }
}
