//! Primitive types for [docsrc](https://docs.rs/docsrc).
//!
//! These types are shared by the API server crate and the configuration and
//! test helper packages.
use derive_more::Display;
use serde::{Deserialize, Serialize};

pub mod session_id;

/// The database management system used to persist learning sessions.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Copy, Hash, Display)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseDriver {
    /// The `SQLite3` database driver. The connection string is a file path.
    Sqlite3,
    /// The `MySQL` database driver. The connection string is a `mysql://` URL.
    MySQL,
}
