//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON.
//!
//! Does NOT handle:
//! - Other output formats.

use anyhow::Result;
use covo_directory::UserRecord;

use crate::commands::config::SettingsDisplay;
use crate::commands::inspect::InspectOutput;
use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format_databases(&self, names: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(names)?)
    }

    fn format_collections(&self, names: &[String]) -> Result<String> {
        Ok(serde_json::to_string_pretty(names)?)
    }

    fn format_users(&self, users: &[UserRecord]) -> Result<String> {
        Ok(serde_json::to_string_pretty(users)?)
    }

    fn format_inspect(&self, output: &InspectOutput) -> Result<String> {
        Ok(serde_json::to_string_pretty(output)?)
    }

    fn format_settings(&self, settings: &SettingsDisplay) -> Result<String> {
        Ok(serde_json::to_string_pretty(settings)?)
    }
}
