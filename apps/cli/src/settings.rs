//! Layered settings: defaults, then the TOML file, then `BILLFORM_*`
//! environment variables (`__` separates nested keys, e.g.
//! `BILLFORM_RENDER__TEXTAREA_MAX_LENGTH=500`).

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Context;
use billform_field::render::RenderSettings;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Default settings file looked up in the working directory.
pub const DEFAULT_FILE: &str = "billform.toml";

// Flat variables owned by the logger and the CLI, not settings keys.
const FLAT_VARS: &[&str] = &[
    "config",
    "log",
    "log_format",
    "log_time",
    "log_source",
    "log_colors",
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub log: billform_log::Config,
    pub render: RenderSettings,
    /// Message template overrides keyed by rule name.
    pub messages: BTreeMap<String, String>,
}

impl Settings {
    /// Load settings, reading `file` if given, else `billform.toml` if present.
    pub fn load(file: Option<&Path>) -> anyhow::Result<Self> {
        let defaults = Self {
            log: billform_log::Config::from_env(),
            ..Self::default()
        };
        let mut figment = Figment::from(Serialized::defaults(defaults));

        match file {
            Some(path) => {
                if !path.is_file() {
                    anyhow::bail!("settings file {} not found", path.display());
                }
                figment = figment.merge(Toml::file(path));
            }
            None => {
                let path = PathBuf::from(DEFAULT_FILE);
                if path.is_file() {
                    figment = figment.merge(Toml::file(path));
                }
            }
        }

        figment
            .merge(Env::prefixed("BILLFORM_").ignore(FLAT_VARS).split("__"))
            .extract()
            .context("failed to load settings")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_figment() {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .extract()
            .unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.render.textarea_max_length, 255);
    }

    #[test]
    fn toml_overrides_defaults() {
        let settings: Settings = Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::string(
                r#"
                [render]
                dropdown_placeholder = "Pick one"

                [messages]
                required = "Needed"
                "#,
            ))
            .extract()
            .unwrap();
        assert_eq!(settings.render.dropdown_placeholder, "Pick one");
        assert_eq!(settings.render.textarea_max_length, 255);
        assert_eq!(settings.messages["required"], "Needed");
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let err = Settings::load(Some(Path::new("/nonexistent/billform.toml"))).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }
}
