use camino::Utf8PathBuf;
use docsrc_configuration::{Configuration, Threshold};

use crate::random;

/// The language sources table shipped with the repository.
pub const DEFAULT_SOURCES_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../../share/default/sources/language_sources.json");

/// This configuration is used for testing. It generates random config values so they do not collide
/// if you run more than one server at the same time.
///
/// # Panics
///
/// Will panic if it can't convert the temp file path to string
#[must_use]
pub fn ephemeral() -> Configuration {
    let mut config = Configuration::default();

    config.logging.threshold = Threshold::Off; // Change to `debug` for tests debugging

    // Ephemeral socket address for the API
    let api_port = 0u16;
    config.http_api.bind_address = format!("127.0.0.1:{}", &api_port).parse().expect("it should parse the socket address");

    config.core.sources.path = Utf8PathBuf::from(DEFAULT_SOURCES_PATH);

    // Ephemeral sqlite database
    config.core.database.path = random::sqlite_database_path()
        .to_str()
        .expect("the temp directory should be a valid UTF-8 path")
        .to_owned();

    config
}

/// Ephemeral configuration with the API protected by the given key.
#[must_use]
pub fn ephemeral_with_api_key(api_key: &str) -> Configuration {
    let mut config = ephemeral();

    config.http_api.api_key = Some(api_key.to_owned());

    config
}

/// Ephemeral configuration reading the language sources from a custom file.
#[must_use]
pub fn ephemeral_with_sources(path: &str, reload_on_request: bool) -> Configuration {
    let mut config = ephemeral();

    config.core.sources.path = Utf8PathBuf::from(path);
    config.core.sources.reload_on_request = reload_on_request;

    config
}
