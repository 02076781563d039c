//! Configuration inspection commands.
//!
//! Responsibilities:
//! - Show the fully resolved settings with secrets redacted.
//!
//! Does NOT handle:
//! - Settings mutation. Settings resolve exclusively from defaults, `.env`,
//!   and environment variables; there is nothing to write.
//!
//! Invariants:
//! - The API key never reaches stdout. The display struct replaces it with
//!   `****` before any formatter sees it.

use anyhow::Result;
use clap::Subcommand;
use covo_config::Settings;
use serde::Serialize;

use crate::formatters::{OutputFormat, get_formatter};

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the resolved settings
    Show,
}

/// Redacted, serializable view of resolved settings.
#[derive(Debug, Serialize)]
pub struct SettingsDisplay {
    pub api_key: String,
    pub model_name: String,
    pub max_tokens: u32,
    pub temperature: f64,
    pub database_uri: String,
    pub rate_limit: u32,
    pub timeout_seconds: u64,
}

impl From<&Settings> for SettingsDisplay {
    fn from(settings: &Settings) -> Self {
        Self {
            api_key: "****".to_string(),
            model_name: settings.model_name().to_string(),
            max_tokens: settings.max_tokens(),
            temperature: settings.temperature(),
            database_uri: settings.database_uri().to_string(),
            rate_limit: settings.rate_limit(),
            timeout_seconds: settings.timeout().as_secs(),
        }
    }
}

pub fn run(settings: &Settings, command: ConfigCommand, format: OutputFormat) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            let display = SettingsDisplay::from(settings);
            let formatter = get_formatter(format);
            print!("{}", formatter.format_settings(&display)?);
        }
    }
    Ok(())
}
