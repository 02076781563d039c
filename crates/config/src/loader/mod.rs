//! Settings loader for environment variables and `.env` files.
//!
//! Responsibilities:
//! - Load configuration from built-in defaults, explicit builder values,
//!   a `.env` file, and live environment variables.
//! - Provide a builder-pattern `SettingsLoader` for layered merging.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Consuming the resolved settings (callers receive an immutable
//!   `Settings`).
//!
//! Invariants / Assumptions:
//! - Live environment variables take precedence over `.env` file values,
//!   which take precedence over builder methods, which take precedence
//!   over defaults.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading;
//!   `resolve()` does so exactly once.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()`
//!   is called.

mod builder;
mod diagnostics;
mod env;
mod error;

pub use builder::SettingsLoader;
pub use diagnostics::{SkipReason, SkippedOverride};
pub use error::ConfigError;

#[cfg(test)]
mod tests;
