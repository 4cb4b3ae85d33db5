//! Setup for the main docsrc application.
//!
//! The [`setup`] only builds the application and its dependencies but it does
//! not start the application. In fact, there is no such thing as the main
//! application process. When the application starts, the only thing it does is
//! starting a bunch of independent jobs. If you are looking for how things are
//! started you should read [`app::start`](crate::app::start) function
//! documentation.
//!
//! Setup steps:
//!
//! 1. Load the global application configuration.
//! 2. Initialize logging.
//! 3. Initialize the domain docs service: load the sources and connect to
//!    the session database.
use std::sync::Arc;

use docsrc_configuration::Configuration;
use tracing::info;

use super::config::initialize_configuration;
use crate::bootstrap;
use crate::core::services::docs_service_factory;
use crate::core::DocsService;

/// It loads the configuration from the environment and builds the main domain [`DocsService`] struct.
#[must_use]
pub fn setup() -> (Configuration, Arc<DocsService>) {
    let configuration = initialize_configuration();
    let docs = initialize_with_configuration(&configuration);

    let mut masked = configuration.clone();
    masked.mask_secrets();

    info!("Configuration:\n{}", masked.to_json());

    (configuration, docs)
}

/// It initializes the application with the given configuration.
///
/// The configuration may be obtained from the environment (via config file or env vars).
#[must_use]
pub fn initialize_with_configuration(configuration: &Configuration) -> Arc<DocsService> {
    initialize_logging(configuration);
    Arc::new(initialize_docs_service(configuration))
}

/// It builds the domain docs service
///
/// The docs service is the domain layer service. It's the entrypoint to make requests to the domain layer.
/// It's used by other higher-level components like the REST API.
#[must_use]
pub fn initialize_docs_service(config: &Configuration) -> DocsService {
    docs_service_factory(config)
}

/// It initializes the log threshold, format and channel.
///
/// See [the logging setup](crate::bootstrap::logging::setup) for more info about logging.
pub fn initialize_logging(config: &Configuration) {
    bootstrap::logging::setup(config);
}
