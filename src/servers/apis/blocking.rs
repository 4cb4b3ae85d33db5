//! Runs the session store round trips on the blocking thread pool.
//!
//! The `r2d2` drivers block the calling thread until the database answers,
//! so handlers hand those calls to [`tokio::task::spawn_blocking`] and keep
//! the async workers free for other requests.
use std::sync::Arc;

use tokio::task::JoinError;

use crate::core::DocsService;

/// Runs `f` with the docs service on a blocking thread.
///
/// # Errors
///
/// Will return a `JoinError` if `f` panics.
pub async fn run<F, T>(docs: Arc<DocsService>, f: F) -> Result<T, JoinError>
where
    F: FnOnce(&DocsService) -> T + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || f(&docs)).await
}
