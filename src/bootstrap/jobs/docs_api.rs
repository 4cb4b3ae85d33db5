//! Documentation lookup API job starter.
//!
//! The [`docs_api::start_job`](crate::bootstrap::jobs::docs_api::start_job)
//! function starts the REST API.
//!
//! The [`docs_api::start_job`](crate::bootstrap::jobs::docs_api::start_job)
//! function spawns a new asynchronous task, that tasks is the "**launcher**".
//! The "**launcher**" starts the actual server and sends a message back
//! to the main application. The main application waits until receives
//! the [`Started`](crate::bootstrap::jobs::Started) message from the
//! "**launcher**".
//!
//! Refer to the [configuration documentation](https://docs.rs/docsrc-configuration)
//! for the API configuration options.
use std::sync::Arc;

use docsrc_configuration::HttpApi;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use super::make_rust_tls;
use crate::core::DocsService;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::API_LOG_TARGET;

/// This function starts a new API server with the provided configuration.
///
/// The functions starts a new concurrent task that will run the API server.
/// This task will send a message to the main application process to notify
/// that the API server was successfully started.
///
/// # Panics
///
/// It would panic if the TLS configuration is not valid or the server can not
/// be started.
pub async fn start_job(config: &HttpApi, docs: Arc<DocsService>) -> JoinHandle<()> {
    let bind_to = config.bind_address;

    let tls = make_rust_tls(&config.tsl_config)
        .await
        .map(|tls| tls.expect("it should have a valid API tls configuration"));

    if !config.is_authenticated() {
        warn!(target: API_LOG_TARGET, "No API key configured. The API does not require authentication.");
    }

    let server = ApiServer::new(Launcher::new(bind_to, tls))
        .start(docs, Arc::new(config.clone()))
        .await
        .expect("it should be able to start the API");

    info!(target: API_LOG_TARGET, "API running on: {}", server.state.binding);

    tokio::spawn(async move {
        assert!(!server.state.halt_task.is_closed(), "Halt channel should be open");
        server.state.task.await.expect("failed to close service");
    })
}
