//! API resources for the [`session`](crate::servers::apis::v1::context::session)
//! API context.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::sessions::SessionRecord;

/// Message returned when a session is created.
pub const SESSION_CREATED: &str = "session created";

/// A stored learning session.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Session {
    /// The session id, a UUID in its hyphenated form.
    pub id: String,
    /// `null` when the session was not created on behalf of a user.
    pub user_id: Option<String>,
    pub language: String,
    pub topic: String,
    /// RFC 3339 creation time, in UTC with microsecond precision.
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SessionCreated {
    pub session_id: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SessionList {
    pub sessions: Vec<Session>,
}

impl From<SessionRecord> for Session {
    fn from(session: SessionRecord) -> Self {
        Session {
            id: session.id.to_string(),
            user_id: session.user_id,
            language: session.language,
            topic: session.topic,
            created_at: session.created_at,
        }
    }
}

impl From<&SessionRecord> for SessionCreated {
    fn from(session: &SessionRecord) -> Self {
        SessionCreated {
            session_id: session.id.to_string(),
            message: SESSION_CREATED.to_string(),
        }
    }
}

impl From<Vec<SessionRecord>> for SessionList {
    fn from(sessions: Vec<SessionRecord>) -> Self {
        SessionList {
            sessions: sessions.into_iter().map(Session::from).collect(),
        }
    }
}
