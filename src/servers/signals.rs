//! Shutdown signals for the API server.
//!
//! A running server stops when the process receives `Ctrl-C` or `SIGTERM`,
//! or when its controller sends [`Halted`] through the halt channel.
use std::time::Duration;

use derive_more::Display;
use tokio::sync::oneshot::Receiver;
use tokio::time::sleep;
use tracing::info;

/// Time the open connections get to finish after a shutdown request.
const GRACE_PERIOD: Duration = Duration::from_secs(90);

/// Message sent by a server controller to stop its running server.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves on `Ctrl-C` or, on unix, on `SIGTERM`.
///
/// # Panics
///
/// Will panic if the signal handlers can not be installed.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Waits for a halt message or a process signal, then drains the server
/// behind `handle`.
///
/// It resolves once the server has no connections left.
///
/// # Panics
///
/// Will panic if the halt sender is dropped without sending.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: Receiver<Halted>, message: String) {
    tokio::select! {
        halted = rx_halt => {
            let signal = halted.unwrap_or_else(|err| panic!("the halt channel was closed: {err}"));
            info!("Halt signal processed: {signal}");
        },
        () = global_shutdown_signal() => info!("Global shutdown signal processed"),
    }

    info!("{message}");

    handle.graceful_shutdown(Some(GRACE_PERIOD));

    while handle.connection_count() > 0 {
        info!("remaining alive connections: {}", handle.connection_count());

        sleep(Duration::from_secs(1)).await;
    }
}
