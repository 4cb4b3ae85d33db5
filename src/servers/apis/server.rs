//! Logic to run the HTTP API server.
//!
//! It contains two main structs: `ApiServer` and `Launcher`.
//!
//! The `ApiServer` struct is responsible for:
//! - Starting and stopping the server.
//! - Keeping the state of the server: `running` or `stopped`.
//!
//! `ApiServer` relies on a launcher to start the actual server.
//!
//! 1. `ApiServer::start` -> spawns new asynchronous task.
//! 2. `Launcher::start` -> starts the server on the spawned task.
//!
//! The `Launcher` struct is responsible for:
//!
//! - Knowing how to start the server with graceful shutdown.
//!
//! The main application starts the server once and runs it until the process
//! receives a shutdown signal. Tests start and stop it many times.
use std::net::SocketAddr;
use std::sync::Arc;

use axum_server::tls_rustls::RustlsConfig;
use axum_server::Handle;
use derive_more::{Constructor, Display};
use docsrc_configuration::HttpApi;
use futures::future::BoxFuture;
use futures::FutureExt as _;
use thiserror::Error;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::{error, info};

use super::routes::router;
use super::API_LOG_TARGET;
use crate::bootstrap::jobs::Started;
use crate::core::DocsService;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, Error)]
pub enum Error {
    #[error("the server task stopped before sending its bound address: {0}")]
    FailedToStart(tokio::sync::oneshot::error::RecvError),

    #[error("the halt channel of the server was already closed")]
    FailedToHalt,

    #[error("the server task failed: {0}")]
    FailedToStop(tokio::task::JoinError),
}

/// A stopped API server.
pub type StoppedApiServer = ApiServer<Stopped>;

/// A running API server.
pub type RunningApiServer = ApiServer<Running>;

/// A API server controller.
///
/// It's a state machine: it can only be started when it is stopped and
/// stopped when it is running. The launcher, with the bind address and the
/// TLS configuration, is kept between runs.
pub struct ApiServer<S> {
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address where the server is bound.
    pub binding: SocketAddr,
    pub halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns a `ApiServer` controller in `running`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if no `SocketAddr` is returned after launching the server.
    ///
    /// # Panics
    ///
    /// It would panic if the bound socket address cannot be sent back to this starter.
    pub async fn start(self, docs: Arc<DocsService>, config: Arc<HttpApi>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start) = tokio::sync::oneshot::channel::<Started>();
        let (tx_halt, rx_halt) = tokio::sync::oneshot::channel::<Halted>();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(docs, config, tx_start, rx_halt);

            server.await;

            launcher
        });

        let started = rx_start.await.map_err(Error::FailedToStart)?;

        Ok(ApiServer {
            state: Running {
                binding: started.address,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns a `ApiServer` controller in `stopped`
    /// state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the task killer signal was closed.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|_| Error::FailedToHalt)?;

        let launcher = self.state.task.await.map_err(Error::FailedToStop)?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// A struct responsible for starting the API server.
#[derive(Constructor, Clone, Debug, Display)]
#[display("intended_address: {bind_to}, with tls: {}", self.have_tls())]
pub struct Launcher {
    bind_to: SocketAddr,
    tls: Option<RustlsConfig>,
}

impl Launcher {
    fn have_tls(&self) -> bool {
        self.tls.is_some()
    }

    /// Starts the API server with graceful shutdown.
    ///
    /// The returned future resolves when the server stops.
    ///
    /// # Panics
    ///
    /// Will panic if unable to bind to the socket, or unable to get the address
    /// of the bound socket, or unable to send the started message.
    fn start(
        &self,
        docs: Arc<DocsService>,
        config: Arc<HttpApi>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, ()> {
        let socket = std::net::TcpListener::bind(self.bind_to).expect("Could not bind tcp_listener to address.");
        let address = socket.local_addr().expect("Could not get local_addr from tcp_listener.");

        let router = router(docs, config);

        let handle = Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down the API server on: {address}"),
        ));

        let tls = self.tls.clone();
        let protocol = if tls.is_some() { "https" } else { "http" };

        info!(target: API_LOG_TARGET, "Starting on {protocol}://{}", address);

        let running = async move {
            let result = match tls {
                Some(tls) => {
                    axum_server::from_tcp_rustls(socket, tls)
                        .handle(handle)
                        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
                        .await
                }
                None => {
                    axum_server::from_tcp(socket)
                        .handle(handle)
                        .serve(router.into_make_service_with_connect_info::<SocketAddr>())
                        .await
                }
            };

            if let Err(e) = result {
                error!(target: API_LOG_TARGET, "the server stopped with an error: {e}");
            }
        };

        info!(target: API_LOG_TARGET, "Started on {protocol}://{}", address);

        tx_start
            .send(Started { address })
            .expect("the API server should not be dropped");

        running.boxed()
    }
}
