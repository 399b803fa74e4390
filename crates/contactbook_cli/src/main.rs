//! Command-line front end for the address book.
//!
//! # Responsibility
//! - Resolve configuration from flags and environment.
//! - Open the JSON-backed book once and dispatch one command against it.
//! - Report every core error to the user with a non-zero exit status.

mod cli;
mod commands;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use contactbook_core::{default_log_level, init_logging, ContactService, JsonFileStore};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        let log_dir = absolute_path(log_dir)?;
        init_logging(level, &log_dir)
            .with_context(|| format!("failed to initialize logging in `{}`", log_dir.display()))?;
    }

    let mut service = ContactService::open(JsonFileStore::new(&cli.store))
        .with_context(|| format!("failed to open address book `{}`", cli.store.display()))?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::execute(&mut service, cli.command, &mut out)
}

fn absolute_path(path: &Path) -> anyhow::Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("failed to resolve current directory")?;
    Ok(cwd.join(path))
}
