//! Document store directory client.
//!
//! This crate provides a thin, blocking wrapper over the official `mongodb`
//! driver for listing databases, collections, and user documents filtered
//! by role. It performs no retry, no pooling of its own, and no error
//! translation: driver failures propagate raw to the caller.

mod directory;
pub mod models;

pub use directory::{Directory, UserCursor};
pub use models::UserRecord;

/// Raw driver result type; this crate adds no error translation.
pub use mongodb::error::Result;
