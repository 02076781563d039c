//! Configuration management for the Covo platform tools.
//!
//! This crate provides the immutable [`Settings`] type and the
//! [`SettingsLoader`] builder that resolves it from layered sources:
//! built-in defaults, explicit builder values, a `.env` file, and live
//! environment variables (highest precedence).

pub mod constants;
mod loader;
mod settings;

pub use loader::{ConfigError, SettingsLoader, SkipReason, SkippedOverride};
pub use settings::Settings;
