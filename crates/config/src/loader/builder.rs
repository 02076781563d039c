//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` for layered settings merging.
//! - Support loading from a `.env` file, live environment variables, and
//!   direct builder methods.
//! - Build the final immutable `Settings` from resolved values.
//!
//! Does NOT handle:
//! - Environment variable parsing logic (delegated to env.rs).
//! - Consuming the resolved settings.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over builder methods, which take
//!   precedence over built-in defaults. `.env` values enter through the
//!   process environment and never clobber live variables, so the file layer
//!   sits between builder methods and the live environment.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading;
//!   `resolve()` does so exactly once.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is
//!   called.
//! - A recognized override that fails coercion is skipped, never fatal.

use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;

use super::diagnostics::{DiagnosticsSink, SkipReason, SkippedOverride};
use super::env::apply_env;
use super::error::ConfigError;
use crate::constants::{
    DEFAULT_MAX_TOKENS, DEFAULT_MODEL_NAME, DEFAULT_RATE_LIMIT_PER_MIN, DEFAULT_TEMPERATURE,
    DEFAULT_TIMEOUT_SECS,
};
use crate::settings::Settings;

/// Settings loader that builds [`Settings`] from defaults, builder values,
/// a `.env` file, and live environment variables.
pub struct SettingsLoader {
    api_key: Option<SecretString>,
    model_name: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f64>,
    database_uri: Option<String>,
    rate_limit: Option<u32>,
    timeout: Option<Duration>,
    diagnostics: Option<DiagnosticsSink>,
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SettingsLoader {
    /// Create a new settings loader with every field unset.
    pub fn new() -> Self {
        Self {
            api_key: None,
            model_name: None,
            max_tokens: None,
            temperature: None,
            database_uri: None,
            rate_limit: None,
            timeout: None,
            diagnostics: None,
        }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the `.env` file will not be loaded (useful for testing).
    ///
    /// Values from the file never override variables already present in the
    /// live environment, which is what places the file layer below live
    /// variables and above builder values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent
    /// secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read overrides from the process environment.
    ///
    /// Environment variables take precedence over values supplied through
    /// builder methods. Recognized variables that fail coercion are skipped
    /// with a diagnostic and the previously resolved value is retained, so
    /// this step never fails.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set the API key for the AI scoring service.
    pub fn with_api_key(mut self, key: String) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Set the model identifier.
    pub fn with_model_name(mut self, name: String) -> Self {
        self.model_name = Some(name);
        self
    }

    /// Set the completion token budget per request.
    pub fn with_max_tokens(mut self, tokens: u32) -> Self {
        self.max_tokens = Some(tokens);
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the document store connection string.
    pub fn with_database_uri(mut self, uri: String) -> Self {
        self.database_uri = Some(uri);
        self
    }

    /// Set the request rate limit in requests per minute.
    pub fn with_rate_limit(mut self, limit: u32) -> Self {
        self.rate_limit = Some(limit);
        self
    }

    /// Set the collaborator call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Install a callback invoked for every skipped override.
    ///
    /// Skipped overrides are always logged via `tracing::warn!`; the callback
    /// is for callers that want to surface them programmatically.
    pub fn with_diagnostics<F>(mut self, sink: F) -> Self
    where
        F: Fn(&SkippedOverride) + Send + Sync + 'static,
    {
        self.diagnostics = Some(Box::new(sink));
        self
    }

    /// Run the full resolution pipeline: `.env` file, then live environment,
    /// then defaults and validation.
    ///
    /// # Errors
    ///
    /// Returns an error if the `.env` file is malformed or unreadable, or if
    /// a required field is missing after all layers are applied.
    pub fn resolve(self) -> Result<Settings, ConfigError> {
        self.load_dotenv()?.from_env().build()
    }

    /// Build the final settings, filling unset fields from defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingRequired` naming every required field
    /// that is still absent (or blank) after all layers.
    pub fn build(self) -> Result<Settings, ConfigError> {
        let max_tokens = match self.max_tokens {
            Some(tokens) if tokens > 0 => tokens,
            Some(tokens) => {
                self.report_skip("max_tokens", &tokens.to_string(), SkipReason::NotPositive);
                DEFAULT_MAX_TOKENS
            }
            None => DEFAULT_MAX_TOKENS,
        };

        let rate_limit = match self.rate_limit {
            Some(limit) if limit > 0 => limit,
            Some(limit) => {
                self.report_skip("rate_limit", &limit.to_string(), SkipReason::NotPositive);
                DEFAULT_RATE_LIMIT_PER_MIN
            }
            None => DEFAULT_RATE_LIMIT_PER_MIN,
        };

        let timeout = match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            Some(timeout) => {
                self.report_skip(
                    "timeout",
                    &format!("{}ms", timeout.as_millis()),
                    SkipReason::NotPositive,
                );
                Duration::from_secs(DEFAULT_TIMEOUT_SECS)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        // Blank required values are treated as absent.
        let api_key = self
            .api_key
            .filter(|key| !key.expose_secret().trim().is_empty());
        let database_uri = self.database_uri.filter(|uri| !uri.trim().is_empty());

        let mut missing = Vec::new();
        if api_key.is_none() {
            missing.push("api_key");
        }
        if database_uri.is_none() {
            missing.push("database_uri");
        }

        let (Some(api_key), Some(database_uri)) = (api_key, database_uri) else {
            return Err(ConfigError::MissingRequired { fields: missing });
        };

        Ok(Settings {
            api_key,
            model_name: self
                .model_name
                .unwrap_or_else(|| DEFAULT_MODEL_NAME.to_string()),
            max_tokens,
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            database_uri,
            rate_limit,
            timeout,
        })
    }

    // Internal setters for use by the env module. Coercion happens at the
    // call site; these only record already-validated values.

    pub(crate) fn set_api_key(&mut self, key: SecretString) {
        self.api_key = Some(key);
    }

    pub(crate) fn set_model_name(&mut self, name: String) {
        self.model_name = Some(name);
    }

    pub(crate) fn set_max_tokens(&mut self, tokens: u32) {
        self.max_tokens = Some(tokens);
    }

    pub(crate) fn set_temperature(&mut self, temperature: f64) {
        self.temperature = Some(temperature);
    }

    pub(crate) fn set_database_uri(&mut self, uri: String) {
        self.database_uri = Some(uri);
    }

    /// Record a skipped override: always logged, forwarded to the
    /// diagnostics callback when one is installed.
    pub(crate) fn report_skip(&self, var: &'static str, value: &str, reason: SkipReason) {
        let skipped = SkippedOverride {
            var,
            value: value.to_string(),
            reason,
        };
        tracing::warn!(
            var = skipped.var,
            value = %skipped.value,
            reason = %skipped.reason,
            "Skipping override; keeping previously resolved value"
        );
        if let Some(sink) = &self.diagnostics {
            sink(&skipped);
        }
    }
}
