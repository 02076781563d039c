//! Databases command implementation.
//!
//! Responsibilities:
//! - List database names visible on the server.
//!
//! Does NOT handle:
//! - Driver access details (see `covo-directory`).
//! - Output formatting details (see formatters module).

use anyhow::Result;
use covo_config::Settings;
use tracing::debug;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(settings: &Settings, format: OutputFormat) -> Result<()> {
    let directory = super::open_directory(settings)?;
    let names = directory.database_names()?;
    debug!(count = names.len(), "Listed databases");

    let formatter = get_formatter(format);
    print!("{}", formatter.format_databases(&names)?);
    Ok(())
}
