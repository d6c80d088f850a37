use std::io::{self, Read};
use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use billform_field::prelude::*;
use billform_validator::{RuleParams, RuleSet};
use serde_json::{Map, Value};

use crate::cli::CheckArgs;
use crate::settings::Settings;

/// Exit code for input that failed validation.
const INVALID: u8 = 1;

/// Renderer and validator configured from settings.
pub struct App {
    renderer: FieldRenderer,
    validator: FormValidator,
}

impl App {
    pub fn new(settings: &Settings) -> anyhow::Result<Self> {
        let renderer = FieldRenderer::new(settings.render.clone())
            .with_message_overrides(&settings.messages)
            .context("invalid message overrides")?;
        let validator = FormValidator::new(renderer.messages());
        Ok(Self {
            renderer,
            validator,
        })
    }

    pub fn validate(&self, form: &Path) -> anyhow::Result<ExitCode> {
        let document = load_form(form)?;
        let errors = document.validate(&self.validator);
        tracing::debug!(
            fields = document.len(),
            failed = errors.len(),
            "validated form document"
        );

        println!("{}", serde_json::to_string_pretty(&errors)?);
        Ok(if errors.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::from(INVALID)
        })
    }

    pub fn render(&self, form: &Path, disabled: bool) -> anyhow::Result<ExitCode> {
        let document = load_form(form)?;
        let controls = document.render(&self.renderer, disabled);
        println!("{}", serde_json::to_string_pretty(&controls)?);
        Ok(ExitCode::SUCCESS)
    }

    pub fn check(&self, args: &CheckArgs) -> anyhow::Result<ExitCode> {
        let value = if args.json {
            serde_json::from_str(&args.value).context("VALUE is not valid JSON")?
        } else {
            Value::String(args.value.clone())
        };

        let params = RuleParams::from_value(params_object(&args.params))
            .context("invalid rule parameters")?;
        let rules = RuleSet::parse(&args.rules, &params)
            .context("invalid rule list")?
            .with_messages(self.renderer.messages());

        match rules.first_error(&value) {
            None => {
                println!("ok");
                Ok(ExitCode::SUCCESS)
            }
            Some(message) => {
                println!("{message}");
                Ok(ExitCode::from(INVALID))
            }
        }
    }
}

pub fn types(json: bool) -> anyhow::Result<ExitCode> {
    if json {
        let entries: Vec<Value> = FieldType::ALL
            .into_iter()
            .map(|ty| {
                serde_json::json!({
                    "type": ty,
                    "render": resolve(ty),
                    "rules": default_rules(ty),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("{:<10} {:<10} {:<10} RULES", "TYPE", "CONTROL", "DETAIL");
        for ty in FieldType::ALL {
            let (control, detail) = describe(resolve(ty));
            let rules: Vec<&str> = default_rules(ty).iter().map(|r| r.as_str()).collect();
            let rules = if rules.is_empty() {
                "-".to_owned()
            } else {
                rules.join(", ")
            };
            println!("{:<10} {control:<10} {detail:<10} {rules}", ty.as_str());
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn describe(strategy: RenderStrategy) -> (&'static str, &'static str) {
    match strategy {
        RenderStrategy::Input { keyboard } => (
            "input",
            match keyboard {
                Keyboard::Default => "default",
                Keyboard::Decimal => "decimal",
                Keyboard::Phone => "phone",
                Keyboard::Url => "url",
            },
        ),
        RenderStrategy::Multiline => ("input", "multiline"),
        RenderStrategy::Picker { mode } => (
            "picker",
            match mode {
                PickerMode::Date => "date",
                PickerMode::Time => "time",
                PickerMode::DateTime => "datetime",
            },
        ),
        RenderStrategy::Dropdown => ("dropdown", "-"),
        RenderStrategy::Toggle => ("toggle", "-"),
    }
}

/// `key=value` pairs as a JSON object; values that parse as JSON keep their type.
fn params_object(pairs: &[(String, String)]) -> Value {
    let map: Map<String, Value> = pairs
        .iter()
        .map(|(key, raw)| {
            let value = match serde_json::from_str::<Value>(raw) {
                Ok(parsed @ (Value::Number(_) | Value::Bool(_))) => parsed,
                _ => Value::String(raw.clone()),
            };
            (key.clone(), value)
        })
        .collect();
    Value::Object(map)
}

fn load_form(path: &Path) -> anyhow::Result<FormDocument> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read form from stdin")?;
        text
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?
    };

    FormDocument::from_json(&text).with_context(|| format!("invalid form {}", path.display()))
}
