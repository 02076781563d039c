//! Live integration tests for `covo-cli` against a real MongoDB instance.
//!
//! Responsibilities:
//! - Validate end-to-end CLI wiring (args -> settings -> driver -> output)
//!   against a running server.
//! - Catch connection/config regressions that hermetic tests cannot.
//!
//! Explicitly does NOT cover:
//! - Formatting correctness (covered by unit and hermetic integration tests).
//!
//! Invariants / assumptions:
//! - A reachable server is available at `DATABASE_URI`, or at the local
//!   default `mongodb://localhost:27017`.
//!
//! Run with: cargo test -p covo-cli --test live_tests -- --ignored

use predicates::prelude::*;

fn live_uri() -> String {
    std::env::var("DATABASE_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

/// A command wired to the live server. Short timeouts keep failures fast
/// when the server is down.
fn live_cmd() -> assert_cmd::Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("covo-cli");
    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("API_KEY", "live-test-key");
    cmd.env("DATABASE_URI", live_uri());
    cmd
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_databases_listing() {
    // Every MongoDB deployment exposes at least the admin database.
    live_cmd()
        .arg("databases")
        .assert()
        .code(0)
        .stdout(predicate::str::contains("admin"));
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_collections_listing() {
    live_cmd()
        .args(["collections", "--database", "admin"])
        .assert()
        .code(0);
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_users_listing_is_well_formed_json() {
    let output = live_cmd()
        .env_remove("RUST_LOG")
        .args(["--output", "json", "users", "--role", "Influencer"])
        .output()
        .expect("Failed to run command");
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let parsed: serde_json::Value = serde_json::from_str(&stdout).expect("stdout is valid JSON");
    assert!(parsed.is_array());
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_inspect_walks_all_sections() {
    live_cmd()
        .args(["inspect"])
        .assert()
        .code(0)
        .stdout(predicate::str::contains("== Databases =="))
        .stdout(predicate::str::contains("== Brands =="));
}
