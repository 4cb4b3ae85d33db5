//! Domain service factories.
use docsrc_configuration::Configuration;

use crate::core::DocsService;

/// It returns a new docs service building its dependencies.
///
/// # Panics
///
/// Will panic if the docs service cannot be instantiated.
#[must_use]
pub fn docs_service_factory(config: &Configuration) -> DocsService {
    match DocsService::new(&config.core) {
        Ok(docs) => docs,
        Err(error) => {
            panic!("{}", error)
        }
    }
}
