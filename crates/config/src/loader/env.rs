//! Environment variable parsing for settings resolution.
//!
//! Responsibilities:
//! - Define the static table of recognized override variables and their
//!   typed apply functions.
//! - Apply environment variable values to a `SettingsLoader` instance.
//! - Provide helper functions for reading env vars with empty/whitespace
//!   filtering.
//!
//! Does NOT handle:
//! - Building the final `Settings` (see builder.rs).
//! - `.env` file loading (handled by `SettingsLoader::load_dotenv`).
//!
//! Invariants:
//! - Environment variables take precedence over builder values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Numeric values that fail coercion are skipped with a diagnostic; the
//!   previously resolved value is retained. Never fatal.
//! - Unrecognized environment variables are ignored.

use secrecy::SecretString;

use super::builder::SettingsLoader;
use super::diagnostics::SkipReason;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            // Trimming was needed, allocate new String
            Some(trimmed.to_string())
        }
    })
}

type ApplyFn = fn(&mut SettingsLoader, String);

/// Recognized override variables paired with their typed apply functions.
///
/// The table is the complete set of environment names the loader reads
/// (besides the `DOTENV_DISABLED` gate); dispatch is resolved at compile
/// time rather than by matching on strings at runtime.
const ENV_OVERRIDES: &[(&str, ApplyFn)] = &[
    ("API_KEY", apply_api_key),
    ("MODEL_NAME", apply_model_name),
    ("MAX_TOKENS", apply_max_tokens),
    ("TEMPERATURE", apply_temperature),
    ("DATABASE_URI", apply_database_uri),
];

/// Apply recognized environment variable overrides to the loader.
pub(crate) fn apply_env(loader: &mut SettingsLoader) {
    for (var, apply) in ENV_OVERRIDES {
        if let Some(value) = env_var_or_none(var) {
            apply(loader, value);
        }
    }
}

fn apply_api_key(loader: &mut SettingsLoader, value: String) {
    loader.set_api_key(SecretString::new(value.into()));
}

fn apply_model_name(loader: &mut SettingsLoader, value: String) {
    loader.set_model_name(value);
}

fn apply_max_tokens(loader: &mut SettingsLoader, value: String) {
    match value.parse::<u32>() {
        Ok(tokens) if tokens > 0 => loader.set_max_tokens(tokens),
        Ok(_) => loader.report_skip("MAX_TOKENS", &value, SkipReason::NotPositive),
        Err(_) => loader.report_skip("MAX_TOKENS", &value, SkipReason::Unparseable),
    }
}

fn apply_temperature(loader: &mut SettingsLoader, value: String) {
    match value.parse::<f64>() {
        Ok(temperature) => loader.set_temperature(temperature),
        Err(_) => loader.report_skip("TEMPERATURE", &value, SkipReason::Unparseable),
    }
}

fn apply_database_uri(loader: &mut SettingsLoader, value: String) {
    loader.set_database_uri(value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_env_var_or_none_filters_empty_and_whitespace_strings() {
        // Test 1: Unset env var returns None
        let key1 = "_COVO_TEST_UNSET_VAR";
        let result1 = env_var_or_none(key1);
        assert!(result1.is_none(), "Unset env var should return None");

        // Test 2: Empty string env var returns None
        temp_env::with_vars([(key1, Some(""))], || {
            let result2 = env_var_or_none(key1);
            assert!(result2.is_none(), "Empty string env var should return None");
        });

        // Test 3: Whitespace-only string env var returns None
        temp_env::with_vars([(key1, Some("   "))], || {
            let result3 = env_var_or_none(key1);
            assert!(
                result3.is_none(),
                "Whitespace-only env var should return None"
            );
        });

        // Test 4: Non-empty string env var returns Some(trimmed value)
        let key2 = "_COVO_TEST_SET_VAR";
        temp_env::with_vars([(key2, Some(" test-value "))], || {
            let result4 = env_var_or_none(key2);
            assert_eq!(
                result4,
                Some("test-value".to_string()), // Value is now trimmed
                "Non-empty env var should return Some(trimmed value)"
            );
        });
    }

    #[test]
    fn test_override_table_names() {
        let names: Vec<&str> = ENV_OVERRIDES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            [
                "API_KEY",
                "MODEL_NAME",
                "MAX_TOKENS",
                "TEMPERATURE",
                "DATABASE_URI"
            ]
        );
    }
}
