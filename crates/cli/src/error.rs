//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map configuration and driver errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for specific error categories.
//! - Any error whose chain contains a `ConfigError` maps to `ConfigError`,
//!   regardless of what wrapped it.

use covo_config::ConfigError;
use mongodb::error::{Error as DbError, ErrorKind};

/// Structured exit codes for covo-cli.
///
/// These codes enable scripts to distinguish between different failure modes
/// and take appropriate action (fix the environment, retry, fail fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Configuration error - missing or invalid settings.
    ///
    /// Scripts should fix the environment or `.env` file and not retry
    /// the same invocation.
    ConfigError = 2,

    /// Connection error - network, server selection, DNS, or authentication
    /// failure against the document store.
    ///
    /// Scripts may retry with exponential backoff.
    ConnectionError = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

    /// Returns true if this exit code indicates a retryable condition.
    #[allow(dead_code)]
    pub const fn is_retryable(self) -> bool {
        matches!(self, ExitCode::ConnectionError)
    }
}

impl From<&ConfigError> for ExitCode {
    /// Every configuration failure maps to the same code: the command line
    /// cannot repair settings, only the environment can.
    fn from(_err: &ConfigError) -> Self {
        ExitCode::ConfigError
    }
}

impl From<&DbError> for ExitCode {
    /// Map driver errors to structured exit codes.
    ///
    /// Connection-class failures (transport, server selection, DNS,
    /// authentication) are distinguished because scripts can retry them.
    fn from(err: &DbError) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::DnsResolve { .. }
            | ErrorKind::Authentication { .. } => ExitCode::ConnectionError,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait to extract exit codes from anyhow errors.
///
/// Walks the error chain looking for known error types; the first match
/// determines the exit code.
pub trait ExitCodeExt {
    /// Get the appropriate exit code for this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
            if let Some(db_err) = cause.downcast_ref::<DbError>() {
                return ExitCode::from(db_err);
            }
        }
        ExitCode::GeneralError
    }
}
