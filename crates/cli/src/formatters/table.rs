//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resources as tab-separated tables for interactive use.
//!
//! Does NOT handle:
//! - Other output formats.
//! - File I/O.

use anyhow::Result;
use covo_directory::UserRecord;

use crate::commands::config::SettingsDisplay;
use crate::commands::inspect::InspectOutput;
use crate::formatters::Formatter;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_databases(&self, names: &[String]) -> Result<String> {
        Ok(format_name_list("DATABASE", "No databases found.", names))
    }

    fn format_collections(&self, names: &[String]) -> Result<String> {
        Ok(format_name_list("COLLECTION", "No collections found.", names))
    }

    fn format_users(&self, users: &[UserRecord]) -> Result<String> {
        Ok(format_user_table(users))
    }

    fn format_inspect(&self, output: &InspectOutput) -> Result<String> {
        let mut out = String::new();

        out.push_str("== Databases ==\n");
        out.push_str(&self.format_databases(&output.databases)?);
        out.push('\n');

        out.push_str(&format!("== Collections in {} ==\n", output.database));
        out.push_str(&self.format_collections(&output.collections)?);
        out.push('\n');

        out.push_str("== Influencers ==\n");
        out.push_str(&format_user_table(&output.influencers));
        out.push('\n');

        out.push_str("== Brands ==\n");
        out.push_str(&format_user_table(&output.brands));

        Ok(out)
    }

    fn format_settings(&self, settings: &SettingsDisplay) -> Result<String> {
        let mut out = String::new();

        out.push_str("SETTING\tVALUE\n");
        out.push_str(&format!("api_key\t{}\n", settings.api_key));
        out.push_str(&format!("model_name\t{}\n", settings.model_name));
        out.push_str(&format!("max_tokens\t{}\n", settings.max_tokens));
        out.push_str(&format!("temperature\t{}\n", settings.temperature));
        out.push_str(&format!("database_uri\t{}\n", settings.database_uri));
        out.push_str(&format!("rate_limit\t{}\n", settings.rate_limit));
        out.push_str(&format!("timeout_seconds\t{}\n", settings.timeout_seconds));

        Ok(out)
    }
}

/// Single-column name listing shared by databases and collections.
fn format_name_list(header: &str, empty_message: &str, names: &[String]) -> String {
    if names.is_empty() {
        return format!("{}\n", empty_message);
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", header));
    out.push_str(&format!("{}\n", "=".repeat(header.len())));
    for name in names {
        out.push_str(&format!("{}\n", name));
    }
    out
}

fn format_user_table(users: &[UserRecord]) -> String {
    if users.is_empty() {
        return "No users found.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("NAME\tROLE\n");
    for user in users {
        out.push_str(&format!("{}\t{}\n", user.display_name(), user.role));
    }
    out
}
