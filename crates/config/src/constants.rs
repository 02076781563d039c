//! Centralized constants for the Covo tools workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Model Defaults
// =============================================================================

/// Default model identifier for AI scoring requests.
pub const DEFAULT_MODEL_NAME: &str = "gpt-4o-mini";

/// Default completion token budget per request.
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f64 = 0.7;

// =============================================================================
// Connection & Throttling Defaults
// =============================================================================

/// Default request rate limit in requests per minute.
pub const DEFAULT_RATE_LIMIT_PER_MIN: u32 = 60;

/// Default collaborator timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
