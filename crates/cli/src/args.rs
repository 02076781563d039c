//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `commands` module).
//! - Does not carry configuration values: settings resolve exclusively from
//!   defaults, `.env`, and environment variables. Flags here select WHAT to
//!   list, never how settings resolve.

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "covo-cli")]
#[command(about = "Covo CLI - Inspect the platform document store", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  covo-cli databases\n  covo-cli collections --database main\n  covo-cli users --role Influencer\n  covo-cli users --role Brand --output json\n  covo-cli inspect\n  covo-cli config show\n"
)]
pub struct Cli {
    /// Output format (json, table)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List database names visible on the server
    Databases,

    /// List collection names within one database
    Collections {
        /// Database to inspect
        #[arg(long, default_value = "main")]
        database: String,
    },

    /// List user documents matching a role
    Users {
        /// Database to inspect
        #[arg(long, default_value = "main")]
        database: String,

        /// Collection holding user documents
        #[arg(long, default_value = "users")]
        collection: String,

        /// Role to filter on (e.g. Influencer, Brand)
        #[arg(long)]
        role: String,
    },

    /// Walk the store in one shot: databases, collections, then the
    /// influencer and brand listings
    Inspect {
        /// Database to inspect
        #[arg(long, default_value = "main")]
        database: String,
    },

    /// Configuration inspection
    Config {
        #[command(subcommand)]
        command: commands::config::ConfigCommand,
    },
}
