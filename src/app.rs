//! docsrc application.
//!
//! The application has a global configuration for multiple jobs. It's
//! basically a container for other services.
//!
//! The application is responsible for starting the jobs. For now there is
//! only one: the documentation lookup REST API.
use std::sync::Arc;

use docsrc_configuration::Configuration;
use tokio::task::JoinHandle;

use crate::bootstrap::jobs::docs_api;
use crate::core::DocsService;

/// It starts all the application jobs and returns their handles.
///
/// # Panics
///
/// Will panic if the API can not be started.
pub async fn start(config: &Configuration, docs: Arc<DocsService>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    jobs.push(docs_api::start_job(&config.http_api, docs).await);

    jobs
}
