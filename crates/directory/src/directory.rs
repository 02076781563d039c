//! Blocking directory operations over the document store.
//!
//! Responsibilities:
//! - Open a driver connection from an opaque connection string.
//! - List database names, collection names, and role-filtered user
//!   documents.
//!
//! Does NOT handle:
//! - Retry, backoff, or connection pooling beyond what the driver does.
//! - Error translation: `mongodb::error::Error` propagates raw.
//!
//! Invariants / Assumptions:
//! - The connection string is opaque and owned by the operator; options it
//!   carries always win over values supplied here.
//! - Connecting performs no eager I/O; failures surface on the first
//!   operation.

use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::error::Result;
use mongodb::options::ClientOptions;
use mongodb::sync::{Client, Cursor};

use crate::models::UserRecord;

/// Lazy cursor over typed user documents. Finite, single-pass, not
/// restartable; iteration performs the wire reads.
pub type UserCursor = Cursor<UserRecord>;

/// Handle on the platform document store.
pub struct Directory {
    client: Client,
}

impl Directory {
    /// Create a handle from a connection string.
    ///
    /// `timeout` is applied as the driver's server-selection and connect
    /// timeout only when the URI does not already specify one.
    ///
    /// # Errors
    ///
    /// Fails if the connection string cannot be parsed by the driver.
    pub fn connect(uri: &str, timeout: Duration) -> Result<Self> {
        let mut options = ClientOptions::parse(uri).run()?;
        if options.server_selection_timeout.is_none() {
            options.server_selection_timeout = Some(timeout);
        }
        if options.connect_timeout.is_none() {
            options.connect_timeout = Some(timeout);
        }

        tracing::debug!(
            server_selection_timeout = ?options.server_selection_timeout,
            "Opening document store connection"
        );
        let client = Client::with_options(options)?;
        Ok(Self { client })
    }

    /// List the names of all databases visible to the connection.
    pub fn database_names(&self) -> Result<Vec<String>> {
        self.client.list_database_names().run()
    }

    /// List the collection names of one database.
    pub fn collection_names(&self, db: &str) -> Result<Vec<String>> {
        self.client.database(db).list_collection_names().run()
    }

    /// Stream user documents whose `role` equals the given value.
    pub fn users_with_role(&self, db: &str, collection: &str, role: &str) -> Result<UserCursor> {
        self.client
            .database(db)
            .collection::<UserRecord>(collection)
            .find(role_filter(role))
            .run()
    }
}

/// Equality filter on the `role` field.
fn role_filter(role: &str) -> Document {
    doc! { "role": role }
}
