//! Learning session identifiers.
//!
//! The session store assigns a new [`SessionId`] to every record it creates.
//! Identifiers are random (UUID v4) and always rendered in their hyphenated
//! lowercase form, for example `67e55044-10b1-426f-9247-bb680e5fe0c8`.
use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier of a stored learning session.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug, Display)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Generates a new random identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

/// The string is not a syntactically valid session identifier.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid session id: \"{value}\"")]
pub struct ParseSessionIdError {
    pub value: String,
}

impl FromStr for SessionId {
    type Err = ParseSessionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::try_parse(s).map(SessionId).map_err(|_| ParseSessionIdError { value: s.to_owned() })
    }
}
