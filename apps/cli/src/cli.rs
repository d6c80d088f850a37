use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "billform", version, about = "Render and validate custom invoice form fields")]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./billform.toml when present.
    #[arg(long, short, global = true, env = "BILLFORM_CONFIG")]
    pub config: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(long, short, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate a form document and print the sparse error array
    Validate(FormArgs),

    /// Print the control description of every field in a form document
    Render {
        #[command(flatten)]
        form: FormArgs,

        /// Render every control as disabled
        #[arg(long)]
        disabled: bool,
    },

    /// Check one value against named rules
    Check(CheckArgs),

    /// List field types with their render strategy and default rules
    Types {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug)]
pub struct FormArgs {
    /// Form document (JSON); `-` reads stdin
    pub form: PathBuf,
}

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Value to check
    #[arg(allow_hyphen_values = true)]
    pub value: String,

    /// Rule to apply, in order (repeatable)
    #[arg(long = "rule", short = 'r', value_name = "NAME", required = true)]
    pub rules: Vec<String>,

    /// Rule parameter as key=value (repeatable), e.g. minNumber=0
    #[arg(long = "param", short = 'p', value_name = "KEY=VALUE", value_parser = parse_param)]
    pub params: Vec<(String, String)>,

    /// Parse VALUE as JSON instead of taking it as text
    #[arg(long)]
    pub json: bool,
}

fn parse_param(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_owned(), value.to_owned())),
        _ => Err(format!("expected KEY=VALUE, got `{raw}`")),
    }
}
