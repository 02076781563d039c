//! Resolved application settings.
//!
//! Responsibilities:
//! - Define the immutable `Settings` type produced by the loader.
//! - Expose read-only accessors for every field.
//!
//! Does NOT handle:
//! - Resolution, precedence, or validation (see `loader/builder.rs`).
//! - Reading environment variables (see `loader/env.rs`).
//!
//! Invariants:
//! - `Settings` cannot be mutated after construction; fields are
//!   `pub(crate)` so only the loader can build one.
//! - `api_key` is non-empty and never printed by the derived `Debug`
//!   implementation (redacted via `SecretString`).
//! - `database_uri` is non-empty and otherwise opaque.
//! - `max_tokens` and `rate_limit` are greater than zero; `timeout` is
//!   a non-zero duration.

use secrecy::SecretString;
use std::time::Duration;

/// Fully resolved configuration for the Covo tools.
///
/// Built once per process by [`SettingsLoader`](crate::SettingsLoader)
/// and passed by reference to every consumer.
#[derive(Debug, Clone)]
pub struct Settings {
    pub(crate) api_key: SecretString,
    pub(crate) model_name: String,
    pub(crate) max_tokens: u32,
    pub(crate) temperature: f64,
    pub(crate) database_uri: String,
    pub(crate) rate_limit: u32,
    pub(crate) timeout: Duration,
}

impl Settings {
    /// API key for the AI scoring service.
    pub fn api_key(&self) -> &SecretString {
        &self.api_key
    }

    /// Model identifier for AI scoring requests.
    pub fn model_name(&self) -> &str {
        &self.model_name
    }

    /// Completion token budget per request.
    pub fn max_tokens(&self) -> u32 {
        self.max_tokens
    }

    /// Sampling temperature. Intentionally unconstrained; callers decide
    /// what range makes sense for their model.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Connection string for the platform document store.
    pub fn database_uri(&self) -> &str {
        &self.database_uri
    }

    /// Request rate limit in requests per minute.
    pub fn rate_limit(&self) -> u32 {
        self.rate_limit
    }

    /// Timeout for collaborator calls.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
