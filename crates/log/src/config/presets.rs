//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format};

impl Config {
    /// Create configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create configuration from an arbitrary variable lookup.
    ///
    /// `BILLFORM_LOG` wins over `RUST_LOG`; `BILLFORM_LOG_FORMAT` picks the
    /// format.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(level) = lookup("BILLFORM_LOG").or_else(|| lookup("RUST_LOG")) {
            config.level = level;
        }

        if let Some(format) = lookup("BILLFORM_LOG_FORMAT") {
            config.format = Format::from_name(&format);
        }

        config.display.parse_env(&lookup);
        config
    }

    /// Development configuration (pretty, debug level)
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: "debug".to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: true,
                source: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Production configuration (JSON, info level)
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: "info".to_string(),
            format: Format::Json,
            display: DisplayConfig {
                colors: false,
                source: false,
                flatten: true,
                ..DisplayConfig::default()
            },
        }
    }

    /// Test configuration (no colors, no timestamps)
    #[cfg(test)]
    pub fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: false,
                time: false,
                ..DisplayConfig::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn billform_log_wins_over_rust_log() {
        let config = Config::from_lookup(lookup(&[("BILLFORM_LOG", "debug"), ("RUST_LOG", "warn")]));
        assert_eq!(config.level, "debug");

        let config = Config::from_lookup(lookup(&[("RUST_LOG", "warn")]));
        assert_eq!(config.level, "warn");
    }

    #[test]
    fn empty_environment_is_default() {
        assert_eq!(Config::from_lookup(lookup(&[])), Config::default());
    }

    #[test]
    fn format_and_display_from_env() {
        let config = Config::from_lookup(lookup(&[
            ("BILLFORM_LOG_FORMAT", "json"),
            ("BILLFORM_LOG_COLORS", "false"),
            ("BILLFORM_LOG_TIME", "0"),
            ("BILLFORM_LOG_SOURCE", "1"),
        ]));
        assert_eq!(config.format, Format::Json);
        assert!(!config.display.colors);
        assert!(!config.display.time);
        assert!(config.display.source);
    }

    #[test]
    fn presets() {
        let dev = Config::development();
        assert_eq!(dev.format, Format::Pretty);
        assert!(dev.display.source);

        let prod = Config::production();
        assert_eq!(prod.format, Format::Json);
        assert!(!prod.display.colors);
        assert!(prod.display.flatten);

        assert_eq!(Config::test().level, "trace");
    }
}
