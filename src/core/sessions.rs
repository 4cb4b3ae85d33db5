//! The learning session store.
//!
//! A learning session records that someone looked up the documentation of a
//! language topic. Sessions are created once and never change: there are no
//! update or delete operations.
//!
//! The store owns a handle to the [`Database`] and translates its failures
//! into the errors the API layer understands.
use std::sync::Arc;

use chrono::{DateTime, SubsecRound, Utc};
use docsrc_primitives::session_id::{ParseSessionIdError, SessionId};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::databases::{self, Database};
use super::resolver::DEFAULT_TOPIC;

/// A stored learning session.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SessionRecord {
    pub id: SessionId,
    /// `None` when the session was not created on behalf of a user.
    pub user_id: Option<String>,
    /// Lowercase language slug.
    pub language: String,
    pub topic: String,
    /// Set by the store when the session is created. Microsecond precision.
    pub created_at: DateTime<Utc>,
}

/// Session store errors.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Invalid session id: {source}")]
    InvalidIdentifier { source: ParseSessionIdError },

    #[error("Session not found: {id}")]
    NotFound { id: SessionId },

    #[error("Session store unavailable: {source}")]
    StoreUnavailable { source: databases::error::Error },
}

impl From<databases::error::Error> for Error {
    fn from(source: databases::error::Error) -> Self {
        Self::StoreUnavailable { source }
    }
}

/// Creates and looks up learning sessions.
pub struct SessionStore {
    database: Arc<Box<dyn Database>>,
}

impl SessionStore {
    #[must_use]
    pub fn new(database: &Arc<Box<dyn Database>>) -> Self {
        Self {
            database: database.clone(),
        }
    }

    /// Creates a new session.
    ///
    /// The language is stored lower-cased and a missing topic is stored as
    /// `default`.
    ///
    /// # Errors
    ///
    /// Will return `StoreUnavailable` if the session can not be saved.
    pub fn create(&self, language: &str, topic: Option<&str>, user_id: Option<&str>) -> Result<SessionRecord, Error> {
        let session = SessionRecord {
            id: SessionId::generate(),
            user_id: user_id.map(ToOwned::to_owned),
            language: language.to_lowercase(),
            topic: topic.unwrap_or(DEFAULT_TOPIC).to_owned(),
            created_at: Utc::now().trunc_subsecs(6),
        };

        self.database.insert_session(&session)?;

        debug!("Session {} created for language {}", session.id, session.language);

        Ok(session)
    }

    /// Finds a session by its id.
    ///
    /// # Errors
    ///
    /// Will return `InvalidIdentifier` if `id` is not a session id,
    /// `NotFound` if there is no such session and `StoreUnavailable` if the
    /// database can not be queried.
    pub fn get_by_id(&self, id: &str) -> Result<SessionRecord, Error> {
        let id = id
            .parse::<SessionId>()
            .map_err(|source| Error::InvalidIdentifier { source })?;

        self.database.get_session(&id)?.ok_or(Error::NotFound { id })
    }

    /// All the sessions of a user. It is empty when the user has none.
    ///
    /// # Errors
    ///
    /// Will return `StoreUnavailable` if the database can not be queried.
    pub fn list_by_user(&self, user_id: &str) -> Result<Vec<SessionRecord>, Error> {
        Ok(self.database.load_sessions_by_user(user_id)?)
    }

    /// Checks the database connection.
    ///
    /// # Errors
    ///
    /// Will return `StoreUnavailable` if the database can not be reached.
    pub fn ping(&self) -> Result<(), Error> {
        Ok(self.database.ping()?)
    }
}
