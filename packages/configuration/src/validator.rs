//! Trait to validate semantic errors.
//!
//! Errors could involve more than one configuration option. Some configuration
//! combinations can be incompatible.
use thiserror::Error;

/// Errors that can occur validating the configuration.
#[derive(Error, Debug)]
pub enum SemanticValidationError {
    #[error("The `mysql` database driver requires a `mysql://` connection URL, found: \"{path}\".")]
    InvalidMysqlConnectionUrl { path: String },

    #[error("The database path can not be empty.")]
    EmptyDatabasePath,

    #[error("The API key can not be empty. Remove the option to disable authentication.")]
    EmptyApiKey,

    #[error("The language sources path can not be empty.")]
    EmptySourcesPath,
}

pub trait Validator {
    /// # Errors
    ///
    /// Will return an error if the configuration is invalid.
    fn validate(&self) -> Result<(), SemanticValidationError>;
}
