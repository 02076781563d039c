//! Covo CLI - Command-line inspection of the platform document store.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Resolve settings exactly once and hand them to commands by reference.
//! - Map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Settings precedence logic (see `crates/config`).
//! - Document store access (see `crates/directory`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so the file layer is in
//!   place when settings resolve.
//! - Configuration enters only through defaults, `.env`, and environment
//!   variables; no flag feeds a settings value.

mod args;
mod commands;
mod error;
mod formatters;

use args::{Cli, Commands};
use clap::Parser;
use covo_config::SettingsLoader;
use error::{ExitCode, ExitCodeExt};
use formatters::OutputFormat;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Load .env BEFORE CLI parsing so the file layer participates in
    // settings resolution. A malformed file is a configuration error.
    if let Err(e) = SettingsLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::ConfigError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer())
        .init();

    let exit_code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let format = OutputFormat::from_str(&cli.output)?;

    // .env is already merged into the process environment; one more pass
    // over live variables completes the precedence chain.
    let settings = SettingsLoader::new().from_env().build()?;

    match cli.command {
        Commands::Databases => commands::databases::run(&settings, format),
        Commands::Collections { database } => {
            commands::collections::run(&settings, &database, format)
        }
        Commands::Users {
            database,
            collection,
            role,
        } => commands::users::run(&settings, &database, &collection, &role, format),
        Commands::Inspect { database } => commands::inspect::run(&settings, &database, format),
        Commands::Config { command } => commands::config::run(&settings, command, format),
    }
}
