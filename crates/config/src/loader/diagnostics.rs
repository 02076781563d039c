//! Diagnostics for non-fatal resolution events.
//!
//! Responsibilities:
//! - Describe overrides that were recognized but skipped during
//!   resolution (unparseable or out-of-range values).
//!
//! Does NOT handle:
//! - Fatal resolution failures (see `error.rs`).
//!
//! Invariants:
//! - A skipped override never aborts resolution; the previously resolved
//!   value is retained.
//! - Only numeric overrides can be skipped, so `value` never carries a
//!   secret.

use std::fmt;

/// Callback invoked for every skipped override.
pub(crate) type DiagnosticsSink = Box<dyn Fn(&SkippedOverride) + Send + Sync>;

/// A recognized override whose value was ignored during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedOverride {
    /// Environment variable or builder field the value came from.
    pub var: &'static str,
    /// The raw value that was rejected.
    pub value: String,
    /// Why the value was rejected.
    pub reason: SkipReason,
}

/// Why an override was skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The value did not parse as the field's type.
    Unparseable,
    /// The value parsed but was not greater than zero.
    NotPositive,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unparseable => write!(f, "not a valid number"),
            SkipReason::NotPositive => write!(f, "not greater than zero"),
        }
    }
}
