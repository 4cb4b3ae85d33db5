//! Errors building the core [`DocsService`](crate::core::DocsService).
//!
//! Error | Context | Description
//! ---|---|---
//! `Sources` | Documentation sources | The sources file is missing or malformed.
//! `Database` | Learning sessions | The database driver could not be built.
//!
//! Both are fatal: the server does not start without a valid sources table
//! and a reachable database.
use super::{databases, sources};

#[derive(thiserror::Error, Debug, Clone)]
pub enum Error {
    #[error("Unable to load the documentation sources: {source}")]
    Sources { source: sources::Error },

    #[error("Unable to initialize the session database: {source}")]
    Database { source: databases::error::Error },
}

impl From<sources::Error> for Error {
    fn from(source: sources::Error) -> Self {
        Self::Sources { source }
    }
}

impl From<databases::error::Error> for Error {
    fn from(source: databases::error::Error) -> Self {
        Self::Database { source }
    }
}
