//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `DOCSRC_`.
use docsrc_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/docsrc.development.sqlite3.toml";

/// It loads the application configuration from the environment.
///
/// There are two methods to inject the configuration:
///
/// 1. By using a config file: `docsrc.toml`.
/// 2. Environment variable: `DOCSRC_CONFIG_TOML`. The variable contains the same contents as the `docsrc.toml` file.
///
/// Environment variable has priority over the config file.
///
/// Refer to the [configuration documentation](https://docs.rs/docsrc-configuration) for the configuration options.
///
/// # Panics
///
/// Will panic if it can't load the configuration from either
/// `./docsrc.toml` file or the env var `DOCSRC_CONFIG_TOML`.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string()).expect("it should build the configuration info");

    Configuration::load(&info).expect("it should load the configuration")
}
