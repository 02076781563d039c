//! Users command implementation.
//!
//! Responsibilities:
//! - List user documents matching a role filter.
//! - Format output via shared formatters.
//!
//! Does NOT handle:
//! - User creation or mutation (the store is read-only from this tool).
//! - Driver access details (see `covo-directory`).
//!
//! Invariants:
//! - The role string is passed to the server verbatim; matching is
//!   case-sensitive.

use anyhow::Result;
use covo_config::Settings;
use covo_directory::{Directory, UserRecord};
use tracing::debug;

use crate::formatters::{OutputFormat, get_formatter};

pub fn run(
    settings: &Settings,
    database: &str,
    collection: &str,
    role: &str,
    format: OutputFormat,
) -> Result<()> {
    let directory = super::open_directory(settings)?;
    let users = collect_users(&directory, database, collection, role)?;
    debug!(database, collection, role, count = users.len(), "Listed users");

    let formatter = get_formatter(format);
    print!("{}", formatter.format_users(&users)?);
    Ok(())
}

/// Drain the driver cursor into memory. The cursor is single-pass, so the
/// first decode failure aborts the listing.
pub fn collect_users(
    directory: &Directory,
    database: &str,
    collection: &str,
    role: &str,
) -> Result<Vec<UserRecord>> {
    let cursor = directory.users_with_role(database, collection, role)?;
    let mut users = Vec::new();
    for user in cursor {
        users.push(user?);
    }
    Ok(users)
}
