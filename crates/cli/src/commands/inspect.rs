//! Inspect command implementation.
//!
//! Responsibilities:
//! - Walk the store in one shot: database names, collection names of the
//!   chosen database, then the influencer and brand listings.
//!
//! Does NOT handle:
//! - Arbitrary role filters (use the `users` subcommand).
//!
//! Invariants:
//! - All four listings run against a single connection.
//! - User listings always read the `users` collection of the chosen database.

use anyhow::Result;
use covo_config::Settings;
use covo_directory::UserRecord;
use serde::Serialize;
use tracing::debug;

use crate::commands::users::collect_users;
use crate::formatters::{OutputFormat, get_formatter};

/// Combined output of the store walk.
#[derive(Debug, Serialize)]
pub struct InspectOutput {
    /// Database whose collections and users were listed.
    pub database: String,
    pub databases: Vec<String>,
    pub collections: Vec<String>,
    pub influencers: Vec<UserRecord>,
    pub brands: Vec<UserRecord>,
}

pub fn run(settings: &Settings, database: &str, format: OutputFormat) -> Result<()> {
    let directory = super::open_directory(settings)?;

    let databases = directory.database_names()?;
    let collections = directory.collection_names(database)?;
    let influencers = collect_users(&directory, database, "users", "Influencer")?;
    let brands = collect_users(&directory, database, "users", "Brand")?;
    debug!(
        database,
        databases = databases.len(),
        collections = collections.len(),
        influencers = influencers.len(),
        brands = brands.len(),
        "Completed store walk"
    );

    let output = InspectOutput {
        database: database.to_string(),
        databases,
        collections,
        influencers,
        brands,
    };

    let formatter = get_formatter(format);
    print!("{}", formatter.format_inspect(&output)?);
    Ok(())
}
