//! `billform`: render and validate custom invoice form fields from the
//! command line.
//!
//! Exit codes: 0 when everything passed, 1 when input failed validation,
//! 2 for configuration or I/O errors.

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;
mod settings;

use cli::{Cli, Command};
use commands::App;
use settings::Settings;

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(level) = billform_log::Level::from_verbosity(cli.verbose) {
        settings.log.level = level.to_string();
    }
    let _guard = billform_log::init_with(settings.log.clone())?;
    tracing::debug!(command = ?cli.command, "starting");

    match cli.command {
        Command::Types { json } => commands::types(json),
        Command::Validate(args) => App::new(&settings)?.validate(&args.form),
        Command::Render { form, disabled } => App::new(&settings)?.render(&form.form, disabled),
        Command::Check(args) => App::new(&settings)?.check(&args),
    }
}
