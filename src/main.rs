use docsrc::servers::signals::global_shutdown_signal;
use docsrc::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, docs) = bootstrap::app::setup();

    let jobs = app::start(&config, docs).await;

    // handle the signals
    tokio::select! {
        () = global_shutdown_signal() => {
            info!("docsrc shutting down ...");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("docsrc successfully shutdown.");
        }
    }
}
