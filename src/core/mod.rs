//! The core `docsrc` module contains the domain logic, which is independent of
//! the delivery layer.
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!         REST API |> DocsService -> Resolver     -> SourceTable (JSON file)
//!                  |              -> SessionStore -> Database (SQLite3 / MySQL)
//! ```
//!
//! # Table of contents
//!
//! - [Languages](#languages)
//! - [Documentation sources](#documentation-sources)
//! - [Learning sessions](#learning-sessions)
//! - [Configuration](#configuration)
//!
//! # Languages
//!
//! The [language catalog](crate::core::languages) is a static list of the
//! supported languages and the frameworks usually learned with them.
//!
//! # Documentation sources
//!
//! The [`DocsService`] resolves a language and a topic into a documentation
//! URL:
//!
//! ```rust,no_run
//! use docsrc::core::DocsService;
//! use docsrc_configuration::Core;
//!
//! let docs = DocsService::new(&Core::default()).unwrap();
//!
//! let url = docs.resolve("Python", None).unwrap();
//!
//! assert_eq!(url, "https://docs.python.org/3/");
//! ```
//!
//! The language is case-insensitive, the topic is not. Unknown topics fall
//! back to the `default` topic of the language. Refer to the
//! [resolver](crate::core::resolver) for the details.
//!
//! # Learning sessions
//!
//! A learning session records a lookup: the language, the topic, an optional
//! user and the creation time. Sessions are persisted with one of the
//! [database drivers](crate::core::databases) and can be retrieved by id or
//! by user.
//!
//! # Configuration
//!
//! The service is configured with the `[core]` section of the configuration:
//!
//! ```toml
//! [core.sources]
//! path = "./share/default/sources/language_sources.json"
//! reload_on_request = false
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/docsrc/lib/database/sqlite3.db"
//! ```
//!
//! Refer to [docsrc-configuration](https://docs.rs/docsrc-configuration) for
//! more information.
pub mod databases;
pub mod error;
pub mod languages;
pub mod resolver;
pub mod services;
pub mod sessions;
pub mod sources;

use std::sync::Arc;

use docsrc_configuration::Core;

use self::databases::Database;
use self::error::Error;
use self::languages::LanguageDescriptor;
use self::resolver::Resolver;
use self::sessions::{SessionRecord, SessionStore};
use self::sources::SourceTable;

/// The domain service used by the API.
///
/// It owns the documentation sources [`Resolver`] and the [`SessionStore`],
/// which holds the database connection pool for the lifetime of the service.
pub struct DocsService {
    resolver: Resolver,
    sessions: SessionStore,
}

impl DocsService {
    /// Loads the sources table and connects to the database.
    ///
    /// # Errors
    ///
    /// Will return an error if the sources file can not be loaded or the
    /// database can not be reached.
    pub fn new(config: &Core) -> Result<DocsService, Error> {
        let resolver = Resolver::new(&config.sources)?;

        let database = Arc::new(databases::driver::build(&config.database.driver, &config.database.path)?);

        Ok(Self::from_parts(resolver, &database))
    }

    /// Builds the service from already initialized parts.
    #[must_use]
    pub fn from_parts(resolver: Resolver, database: &Arc<Box<dyn Database>>) -> DocsService {
        DocsService {
            resolver,
            sessions: SessionStore::new(database),
        }
    }

    /// All the supported languages.
    #[must_use]
    pub fn languages(&self) -> &'static [LanguageDescriptor] {
        languages::all()
    }

    /// Finds the documentation URL of a language topic. Without a topic the
    /// `default` one is used.
    ///
    /// # Errors
    ///
    /// Will return an error if neither the language nor a fallback topic can
    /// be found.
    pub fn resolve(&self, language: &str, topic: Option<&str>) -> Result<String, resolver::Error> {
        self.resolver.resolve(language, topic)
    }

    /// Reads the sources file again.
    ///
    /// # Errors
    ///
    /// Will return an error if the file can not be loaded. The previous table
    /// stays in use.
    pub fn reload_sources(&self) -> Result<Arc<SourceTable>, sources::Error> {
        self.resolver.reload()
    }

    /// Records a new learning session.
    ///
    /// # Errors
    ///
    /// Will return an error if the session can not be saved.
    pub fn create_session(
        &self,
        language: &str,
        topic: Option<&str>,
        user_id: Option<&str>,
    ) -> Result<SessionRecord, sessions::Error> {
        self.sessions.create(language, topic, user_id)
    }

    /// Finds a learning session by its id.
    ///
    /// # Errors
    ///
    /// Will return an error if the id is invalid or unknown, or the database
    /// can not be queried.
    pub fn get_session(&self, id: &str) -> Result<SessionRecord, sessions::Error> {
        self.sessions.get_by_id(id)
    }

    /// All the learning sessions of a user.
    ///
    /// # Errors
    ///
    /// Will return an error if the database can not be queried.
    pub fn list_sessions(&self, user_id: &str) -> Result<Vec<SessionRecord>, sessions::Error> {
        self.sessions.list_by_user(user_id)
    }

    /// Checks that the session store can be reached.
    ///
    /// # Errors
    ///
    /// Will return an error if the database does not answer.
    pub fn health_check(&self) -> Result<(), sessions::Error> {
        self.sessions.ping()
    }
}
