use serde::{Deserialize, Serialize};

use crate::v1::database::Database;
use crate::v1::sources::Sources;
use crate::validator::{SemanticValidationError, Validator};

/// Configuration of the domain services: the documentation source table and
/// the learning session store.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Core {
    /// Language sources table.
    #[serde(default)]
    pub sources: Sources,

    /// Session store.
    #[serde(default)]
    pub database: Database,
}

impl Validator for Core {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        self.sources.validate()?;
        self.database.validate()
    }
}
