//! Documentation source resolution.
//!
//! Given a language and a topic, [`resolve`] finds the documentation URL in a
//! [`SourceTable`]:
//!
//! 1. The language is lower-cased and looked up in the table. An unknown
//!    language is a [`Error::LanguageNotFound`].
//! 2. The topic is looked up verbatim (topics are case-sensitive). An unknown
//!    topic falls back to the [`DEFAULT_TOPIC`] of the same language.
//! 3. When neither is present the result is a [`Error::TopicNotFound`].
//!
//! The [`Resolver`] keeps the loaded table in memory and replaces it as a
//! whole when the sources file is reloaded.
use std::sync::Arc;

use camino::Utf8PathBuf;
use docsrc_configuration::Sources;
use parking_lot::RwLock;
use thiserror::Error;
use tracing::info;

use super::sources::{self, SourceTable};

/// The topic used when a request does not name one, and the fallback for
/// unknown topics.
pub const DEFAULT_TOPIC: &str = "default";

/// Resolution errors.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("Language not found: {language}")]
    LanguageNotFound { language: String },

    #[error("Documentation source not found for topic \"{topic}\" of language \"{language}\"")]
    TopicNotFound { language: String, topic: String },

    /// Only when the table is reloaded for every request.
    #[error("Language sources unavailable: {source}")]
    SourcesUnavailable { source: sources::Error },
}

impl From<sources::Error> for Error {
    fn from(source: sources::Error) -> Self {
        Self::SourcesUnavailable { source }
    }
}

/// Finds the documentation URL of a language topic.
///
/// # Errors
///
/// Will return `LanguageNotFound` if the table does not contain the language
/// and `TopicNotFound` if the language has neither the topic nor a default.
pub fn resolve<'a>(table: &'a SourceTable, language: &str, topic: &str) -> Result<&'a str, Error> {
    let language = language.to_lowercase();

    let Some(topics) = table.topics(&language) else {
        return Err(Error::LanguageNotFound { language });
    };

    topics
        .get(topic)
        .or_else(|| topics.get(DEFAULT_TOPIC))
        .map(String::as_str)
        .ok_or_else(|| Error::TopicNotFound {
            language,
            topic: topic.to_owned(),
        })
}

/// Holds the sources table and resolves lookups against it.
pub struct Resolver {
    table: RwLock<Arc<SourceTable>>,
    path: Utf8PathBuf,
    reload_on_request: bool,
}

impl Resolver {
    /// Loads the sources file named in the configuration.
    ///
    /// # Errors
    ///
    /// Will return an error if the sources file is missing or malformed.
    pub fn new(config: &Sources) -> Result<Self, sources::Error> {
        let table = sources::load(&config.path)?;

        info!("Loaded documentation sources for {} languages from: {}", table.len(), config.path);

        Ok(Self {
            table: RwLock::new(Arc::new(table)),
            path: config.path.clone(),
            reload_on_request: config.reload_on_request,
        })
    }

    /// A resolver over an in-memory table. It can not be reloaded.
    #[must_use]
    pub fn from_table(table: SourceTable) -> Self {
        Self {
            table: RwLock::new(Arc::new(table)),
            path: Utf8PathBuf::new(),
            reload_on_request: false,
        }
    }

    /// The table currently in use.
    #[must_use]
    pub fn table(&self) -> Arc<SourceTable> {
        self.table.read().clone()
    }

    /// Reads the sources file again and swaps the table in use.
    ///
    /// On failure the previous table is kept.
    ///
    /// # Errors
    ///
    /// Will return an error if the sources file is missing or malformed.
    pub fn reload(&self) -> Result<Arc<SourceTable>, sources::Error> {
        let table = Arc::new(sources::load(&self.path)?);

        *self.table.write() = table.clone();

        info!("Reloaded documentation sources for {} languages from: {}", table.len(), self.path);

        Ok(table)
    }

    /// Finds the documentation URL for a language and an optional topic.
    ///
    /// # Errors
    ///
    /// See [`resolve`]. When the table is reloaded for every request it will
    /// also return `SourcesUnavailable` if the file can not be loaded.
    pub fn resolve(&self, language: &str, topic: Option<&str>) -> Result<String, Error> {
        let table = if self.reload_on_request {
            self.reload()?
        } else {
            self.table()
        };

        resolve(&table, language, topic.unwrap_or(DEFAULT_TOPIC)).map(ToOwned::to_owned)
    }
}
