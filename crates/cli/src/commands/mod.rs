//! CLI command implementations.

pub mod collections;
pub mod config;
pub mod databases;
pub mod inspect;
pub mod users;

use anyhow::{Context, Result};
use covo_config::Settings;
use covo_directory::Directory;

/// Open a directory handle from resolved settings.
///
/// Connection failures surface on the first listing call, not here; the
/// driver connects lazily.
pub fn open_directory(settings: &Settings) -> Result<Directory> {
    Directory::connect(settings.database_uri(), settings.timeout())
        .context("Failed to open document store connection")
}
