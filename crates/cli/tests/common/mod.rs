//! Shared test utilities for covo-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Ensure consistent test environment setup.
//!
//! Does NOT:
//! - Handle live test configuration (see `live_tests.rs`).
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - `API_KEY` is set to "test-key" unless overridden.

use assert_cmd::Command;

/// Environment variables recognized by settings resolution.
pub const SETTINGS_VARS: [&str; 5] = [
    "API_KEY",
    "MODEL_NAME",
    "MAX_TOKENS",
    "TEMPERATURE",
    "DATABASE_URI",
];

/// Returns a hermetic `covo-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `API_KEY` is set to a dummy value to satisfy settings validation.
/// - Other recognized env vars are cleared to avoid leakage from the host.
#[allow(dead_code)]
pub fn covo_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("covo-cli");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    for var in SETTINGS_VARS {
        cmd.env_remove(var);
    }

    // Satisfy one of the two required settings; tests control the other.
    cmd.env("API_KEY", "test-key");

    cmd
}

/// Returns a hermetic `covo-cli` command with a specific database URI.
///
/// Convenience wrapper around `covo_cmd()` that also sets `DATABASE_URI`,
/// making the configuration fully resolvable.
#[allow(dead_code)]
pub fn covo_cmd_with_uri(uri: &str) -> Command {
    let mut cmd = covo_cmd();
    cmd.env("DATABASE_URI", uri);
    cmd
}
