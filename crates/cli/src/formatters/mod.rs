//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide the JSON and Table output formats.
//! - Implement the `Formatter` trait for each listable resource.
//!
//! Does NOT handle:
//! - Direct printing to stdout (returns formatted strings).
//! - Redaction (callers pass pre-redacted display structs).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//!
//! ## Empty-State Handling
//!
//! | Format | Empty State Behavior  | Example            |
//! |--------|-----------------------|--------------------|
//! | JSON   | Valid empty structure | `[]`               |
//! | Table  | Human message         | `No users found.`  |
//!
//! Machine-readable output stays parseable; the interactive format gives
//! human feedback instead of a blank screen.

use anyhow::Result;
use covo_directory::UserRecord;

use crate::commands::config::SettingsDisplay;
use crate::commands::inspect::InspectOutput;

mod json;
mod table;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Table,
}

impl OutputFormat {
    /// Parse from string.
    pub fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "table" => Ok(OutputFormat::Table),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: json, table", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    /// Format database names.
    fn format_databases(&self, names: &[String]) -> Result<String>;

    /// Format collection names.
    fn format_collections(&self, names: &[String]) -> Result<String>;

    /// Format user documents.
    fn format_users(&self, users: &[UserRecord]) -> Result<String>;

    /// Format the combined store walk.
    fn format_inspect(&self, output: &InspectOutput) -> Result<String>;

    /// Format resolved settings (already redacted by the caller).
    fn format_settings(&self, settings: &SettingsDisplay) -> Result<String>;
}

/// Get the formatter implementation for an output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(OutputFormat::from_str("json").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("table").unwrap(),
            OutputFormat::Table
        );
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("Table").unwrap(),
            OutputFormat::Table
        );
    }

    #[test]
    fn test_output_format_rejects_unknown() {
        let err = OutputFormat::from_str("yaml").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Invalid output format: yaml"));
        assert!(message.contains("json, table"));
    }
}
