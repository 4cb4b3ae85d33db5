//! The documentation sources table.
//!
//! The table maps every language slug to its topics, and every topic to the
//! URL of its documentation. It is loaded from a JSON file like this one:
//!
//! ```json
//! {
//!   "python": {
//!     "default": "https://docs.python.org/3/",
//!     "flask": "https://flask.palletsprojects.com/"
//!   }
//! }
//! ```
//!
//! The `default` topic is the fallback used by the [resolver](crate::core::resolver)
//! when a topic is unknown. A language without it is accepted here: the
//! problem only shows up when a lookup needs the fallback.
//!
//! The file is validated when it is loaded. A file that does not have the
//! expected shape is rejected as a whole:
//!
//! - the document must be an object of objects of strings;
//! - language keys must be non-empty lowercase slugs;
//! - topic keys must not be empty;
//! - every URL must be an absolute URL.
use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::panic::Location;
use std::str::FromStr;
use std::sync::Arc;

use camino::{Utf8Path, Utf8PathBuf};
use docsrc_located_error::{DynError, LocatedError};
use thiserror::Error;
use tracing::{debug, error};
use url::Url;

/// Documentation URL by topic for a single language.
pub type TopicMap = BTreeMap<String, String>;

/// Documentation topics by language slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceTable {
    languages: BTreeMap<String, TopicMap>,
}

impl SourceTable {
    /// The topics of a language, given its (already lowercase) slug.
    #[must_use]
    pub fn topics(&self, slug: &str) -> Option<&TopicMap> {
        self.languages.get(slug)
    }

    /// The language slugs in the table, sorted.
    pub fn slugs(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

/// The content of a sources file does not have the expected shape.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("the sources file is not an object of objects of strings: {source}")]
    Json { source: serde_json::Error },

    #[error("empty language key")]
    EmptyLanguage,

    #[error("the language key \"{language}\" is not a lowercase slug")]
    LanguageNotLowercase { language: String },

    #[error("empty topic key for language \"{language}\"")]
    EmptyTopic { language: String },

    #[error("invalid URL for topic \"{topic}\" of language \"{language}\": {source}")]
    InvalidUrl {
        language: String,
        topic: String,
        source: url::ParseError,
    },
}

impl FromStr for SourceTable {
    type Err = ParseError;

    fn from_str(json: &str) -> Result<Self, Self::Err> {
        let languages: BTreeMap<String, TopicMap> =
            serde_json::from_str(json).map_err(|source| ParseError::Json { source })?;

        for (language, topics) in &languages {
            if language.trim().is_empty() {
                return Err(ParseError::EmptyLanguage);
            }

            if *language != language.to_lowercase() {
                return Err(ParseError::LanguageNotLowercase {
                    language: language.clone(),
                });
            }

            for (topic, url) in topics {
                if topic.trim().is_empty() {
                    return Err(ParseError::EmptyTopic {
                        language: language.clone(),
                    });
                }

                Url::parse(url).map_err(|source| ParseError::InvalidUrl {
                    language: language.clone(),
                    topic: topic.clone(),
                    source,
                })?;
            }
        }

        Ok(Self { languages })
    }
}

/// Errors loading the sources file.
#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("language sources file not found: {path}, {location}")]
    ResourceNotFound {
        path: Utf8PathBuf,
        location: &'static Location<'static>,
    },

    #[error("malformed language sources file {path}: {source}")]
    MalformedResource {
        path: Utf8PathBuf,
        source: LocatedError<'static, dyn std::error::Error + Send + Sync>,
    },
}

/// Reads and validates the sources file.
///
/// # Errors
///
/// Will return `ResourceNotFound` if there is no file at `path` and
/// `MalformedResource` if it can not be read or does not have the expected
/// shape.
pub fn load(path: &Utf8Path) -> Result<SourceTable, Error> {
    debug!("Loading language sources from: {path}");

    let json = fs::read_to_string(path).map_err(|err| {
        error!("Unable to read language sources from {path}: {err}");

        if err.kind() == io::ErrorKind::NotFound {
            Error::ResourceNotFound {
                path: path.to_owned(),
                location: Location::caller(),
            }
        } else {
            Error::MalformedResource {
                path: path.to_owned(),
                source: (Arc::new(err) as DynError).into(),
            }
        }
    })?;

    json.parse::<SourceTable>().map_err(|err| {
        error!("Malformed language sources file {path}: {err}");

        Error::MalformedResource {
            path: path.to_owned(),
            source: (Arc::new(err) as DynError).into(),
        }
    })
}
