//! Document models for the platform datastore.
//!
//! Types are organized by collection in submodules and re-exported here
//! for convenient access.

pub mod users;

pub use users::UserRecord;
