//! Error types for settings resolution.
//!
//! Responsibilities:
//! - Define error variants for all fatal resolution failures.
//!
//! Does NOT handle:
//! - Skipped overrides (non-fatal; see `diagnostics.rs`).
//!
//! Invariants:
//! - Missing-field errors name every unresolved required field in a
//!   single error value.
//! - Dotenv errors NEVER include raw `.env` line contents to prevent
//!   secret leakage.

use std::io::ErrorKind;
use thiserror::Error;

/// Errors that can occur during settings resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// One or more required settings were unresolved after all layers
    /// were applied.
    #[error(
        "Missing required configuration: {}. Provide the value(s) via environment variables, a .env file, or the loader.",
        .fields.join(", ")
    )]
    MissingRequired { fields: Vec<&'static str> },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}
