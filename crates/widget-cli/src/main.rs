//! Widget CLI
//!
//! Resolves configurable-widget configurations against a directory acting
//! as the content repository.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use std::path::Path;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::{CliError, Result};
use widget_core::FieldSchema;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} Configurable widget CLI", "widget".green().bold());
            println!();
            println!("Run {} for available commands.", "widget --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Resolve {
            host,
            config,
            config_file,
            type_name,
            field,
            resource,
            locale,
            strict,
        } => {
            let raw = read_config(config, config_file.as_deref())?;
            let field = FieldSchema::new(type_name, field);
            let output = commands::run_resolve(&host, &raw, &field, &resource, &locale, strict)?;
            println!("{}", output);
            Ok(())
        }
        Commands::Assets { host, json } => commands::run_assets(&host, json),
        Commands::Classify { paths, module_base } => {
            commands::run_classify(&paths, module_base.as_deref())
        }
    }
}

fn read_config(config: Option<String>, config_file: Option<&Path>) -> Result<String> {
    match (config, config_file) {
        (Some(raw), _) => Ok(raw),
        (None, Some(path)) => Ok(std::fs::read_to_string(path)?),
        (None, None) => Err(CliError::user("Either --config or --config-file is required")),
    }
}
