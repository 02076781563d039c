//! Live server tests against a real MongoDB instance.
//!
//! These tests require a reachable MongoDB server; point `DATABASE_URI`
//! at it (defaults to a local instance).
//!
//! Run with: cargo test -p covo-directory --test live_tests -- --ignored

use std::time::Duration;

use covo_directory::Directory;

/// Connection string for the test server.
fn test_uri() -> String {
    std::env::var("DATABASE_URI").unwrap_or_else(|_| "mongodb://localhost:27017".to_string())
}

fn connect() -> Directory {
    Directory::connect(&test_uri(), Duration::from_secs(5)).expect("Failed to parse test URI")
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_list_database_names() {
    let directory = connect();
    let names = directory
        .database_names()
        .expect("Failed to list databases");

    // Every server carries at least the admin/local databases
    assert!(!names.is_empty(), "Should list at least one database");
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_list_collection_names() {
    let directory = connect();
    // The admin database exists on every deployment
    let result = directory.collection_names("admin");

    assert!(result.is_ok(), "Listing collections should succeed");
}

#[test]
#[ignore = "requires live MongoDB server"]
fn test_live_users_cursor_is_iterable() {
    let directory = connect();
    let cursor = directory
        .users_with_role("main", "users", "Influencer")
        .expect("Failed to open cursor");

    for user in cursor {
        let user = user.expect("Failed to decode user document");
        assert_eq!(user.role, "Influencer");
    }
}
