//! The persistence module.
//!
//! Persistence is implemented with one [`Database`] trait.
//!
//! There are two implementations of the trait (two drivers):
//!
//! - [`Mysql`](crate::core::databases::mysql::Mysql)
//! - [`Sqlite`](crate::core::databases::sqlite::Sqlite)
//!
//! > **NOTICE**: There are no database migrations. The tables are created
//! when the driver is built if they do not exist yet.
//!
//! The only persistent object is the learning session.
//!
//! # Learning sessions
//!
//! Field         | Sample data                              | Description
//! ---|---|---
//! `id`          | `67e55044-10b1-426f-9247-bb680e5fe0c8`   | Session id (UUID v4)
//! `user_id`     | `u1`                                     | Optional user the session belongs to. `NULL` when unspecified
//! `language`    | `python`                                 | Lowercase language slug
//! `topic`       | `default`                                | Topic of the session
//! `created_at`  | 1718131200123456                         | Creation time in microseconds since the Unix epoch (UTC)
pub mod driver;
pub mod error;
pub mod mysql;
pub mod sqlite;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use docsrc_located_error::DynError;
use docsrc_primitives::session_id::SessionId;
use docsrc_primitives::DatabaseDriver;
#[cfg(test)]
use mockall::automock;

use self::error::Error;
use crate::core::sessions::SessionRecord;

/// The persistence trait. It contains all the methods to interact with the database.
#[cfg_attr(test, automock)]
pub trait Database: Sync + Send {
    // Schema

    /// It generates the database tables. SQL queries are hardcoded in the trait
    /// implementation.
    ///
    /// # Context: Schema
    ///
    /// # Errors
    ///
    /// Will return `Error` if unable to create own tables.
    fn create_database_tables(&self) -> Result<(), Error>;

    /// It checks that a connection to the database can be used.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the database can not be reached.
    fn ping(&self) -> Result<(), Error>;

    // Learning sessions

    /// It saves a new learning session.
    ///
    /// # Context: Learning sessions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to save.
    fn insert_session(&self, session: &SessionRecord) -> Result<(), Error>;

    /// It gets a learning session by its id.
    ///
    /// It returns `None` if there is no session with that id.
    ///
    /// # Context: Learning sessions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>, Error>;

    /// It loads all the learning sessions of a user, in the order the
    /// database returns them.
    ///
    /// # Context: Learning sessions
    ///
    /// # Errors
    ///
    /// Will return `Err` if unable to load.
    fn load_sessions_by_user(&self, user_id: &str) -> Result<Vec<SessionRecord>, Error>;
}

/// The column values of a row in the `sessions` table.
struct SessionRow {
    id: String,
    user_id: Option<String>,
    language: String,
    topic: String,
    created_at: i64,
}

#[derive(thiserror::Error, Debug)]
#[error("the timestamp is out of range: {micros} microseconds")]
struct TimestampOutOfRange {
    micros: i64,
}

impl SessionRow {
    fn from_record(session: &SessionRecord) -> Self {
        Self {
            id: session.id.to_string(),
            user_id: session.user_id.clone(),
            language: session.language.clone(),
            topic: session.topic.clone(),
            created_at: session.created_at.timestamp_micros(),
        }
    }

    #[track_caller]
    fn into_record(self, driver: DatabaseDriver) -> Result<SessionRecord, Error> {
        let id = self.id.parse::<SessionId>().map_err(|err| Error::MalformedRecord {
            source: (Arc::new(err) as DynError).into(),
            driver,
        })?;

        let Some(created_at) = DateTime::<Utc>::from_timestamp_micros(self.created_at) else {
            return Err(Error::MalformedRecord {
                source: (Arc::new(TimestampOutOfRange { micros: self.created_at }) as DynError).into(),
                driver,
            });
        };

        Ok(SessionRecord {
            id,
            user_id: self.user_id,
            language: self.language,
            topic: self.topic,
            created_at,
        })
    }
}
