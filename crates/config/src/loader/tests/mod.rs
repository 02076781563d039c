//! Tests for the settings loader builder.
//!
//! Responsibilities:
//! - Test builder methods and default filling.
//! - Test `.env` file loading and the `DOTENV_DISABLED` gate.
//! - Test environment variable handling, coercion, and precedence.
//! - Test positivity fallback and skip diagnostics.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (tested in env.rs).
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}
