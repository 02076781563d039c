//! Collections command implementation.
//!
//! Responsibilities:
//! - List collection names within one database.
//!
//! Does NOT handle:
//! - Driver access details (see `covo-directory`).
//! - Output formatting details (see formatters module).

use anyhow::Result;
use covo_config::Settings;
use tracing::debug;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(settings: &Settings, database: &str, format: OutputFormat) -> Result<()> {
    let directory = super::open_directory(settings)?;
    let names = directory.collection_names(database)?;
    debug!(database, count = names.len(), "Listed collections");

    let formatter = get_formatter(format);
    print!("{}", formatter.format_collections(&names)?);
    Ok(())
}
