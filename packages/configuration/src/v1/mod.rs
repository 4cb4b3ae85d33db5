//! Version `1` for the [docsrc](https://docs.rs/docsrc) configuration.
//!
//! The configuration has three sections:
//!
//! Section | Description
//! ---|---
//! `[logging]` | Logging threshold.
//! `[core]` | Language sources table (`[core.sources]`) and session store (`[core.database]`).
//! `[http_api]` | HTTP API bind address, optional TLS and optional shared API key.
//!
//! Default configuration:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core.sources]
//! path = "./share/default/sources/language_sources.json"
//! reload_on_request = false
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/docsrc/lib/database/sqlite3.db"
//!
//! [http_api]
//! bind_address = "127.0.0.1:8000"
//! ```
pub mod core;
pub mod database;
pub mod http_api;
pub mod logging;
pub mod sources;

use std::fs;
use std::io;
use std::path::Path;
use std::sync::Arc;

use docsrc_located_error::DynError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::core::Core;
use self::http_api::HttpApi;
use self::logging::Logging;
use crate::validator::{SemanticValidationError, Validator};
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Keys whose environment overrides are always taken as plain strings.
///
/// The `Env` provider parses values, so a numeric API key like `123456`
/// would become an integer and `0123` would lose its leading zero.
const VERBATIM_ENV_KEYS: [&str; 2] = ["http_api.api_key", "core.database.path"];

/// Core configuration for the API server.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Default, Clone)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// Domain services configuration.
    #[serde(default)]
    pub core: Core,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the `Info` struct.
    ///
    /// The inline TOML has priority over the TOML file. Single values can
    /// always be overridden with `DOCSRC_` environment variables.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration file does not exist, if it can
    /// not be parsed, or if the resulting configuration is not valid.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let figment = if let Some(config_toml) = &info.config_toml {
            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::string(config_toml))
        } else {
            if !Path::new(&info.config_toml_path).exists() {
                let err = io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("configuration file not found: {}", info.config_toml_path),
                );
                return Err(Error::UnableToLoadFromConfigFile {
                    source: (Arc::new(err) as DynError).into(),
                });
            }

            Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path))
        };

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let figment = VERBATIM_ENV_KEYS.iter().fold(figment, |figment, key| match verbatim_env_override(key) {
            Some(value) => figment.merge(Serialized::default(key, value)),
            None => figment,
        });

        let config: Configuration = figment.extract()?;

        config.validate()?;

        Ok(config)
    }

    /// Saves the configuration to the configuration file.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file can not be written.
    pub fn save_to_file(&self, path: &str) -> Result<(), Error> {
        fs::write(path, self.to_toml()).map_err(|err| Error::UnableToSaveConfigFile {
            source: (Arc::new(err) as DynError).into(),
        })
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration can not be encoded.
    #[must_use]
    pub fn to_toml(&self) -> String {
        toml::to_string(self).expect("Could not encode TOML value")
    }

    /// Encodes the configuration to JSON.
    ///
    /// # Panics
    ///
    /// Will panic if the configuration can not be encoded.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("Could not encode JSON value")
    }

    /// Hides the API key and the database password so the configuration can
    /// be printed.
    pub fn mask_secrets(&mut self) {
        self.http_api.mask_secrets();
        self.core.database.mask_secrets();
    }
}

/// The raw value of the override variable for a dotted key, for example
/// `DOCSRC_HTTP_API__API_KEY` for `http_api.api_key`.
fn verbatim_env_override(key: &str) -> Option<String> {
    let name = format!(
        "{CONFIG_OVERRIDE_PREFIX}{}",
        key.replace('.', CONFIG_OVERRIDE_SEPARATOR).to_uppercase()
    );

    std::env::var(name).ok()
}

impl Validator for Configuration {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        self.core.validate()?;
        self.http_api.validate()
    }
}
