//! Route initialization for the v1 API.
use std::sync::Arc;

use axum::Router;

use super::context::{docs_source, health_check, languages, session, sources};
use crate::core::DocsService;

/// Add the routes for the v1 API.
///
/// The same endpoints are served at the root and under the `/api/v1` prefix.
/// For example, `GET /languages` and `GET /api/v1/languages`.
pub fn add(prefix: &str, router: Router, docs: Arc<DocsService>) -> Router {
    let router = add_contexts(prefix, router, &docs);

    let v1_prefix = format!("{prefix}/api/v1");
    add_contexts(&v1_prefix, router, &docs)
}

fn add_contexts(prefix: &str, router: Router, docs: &Arc<DocsService>) -> Router {
    let router = languages::routes::add(prefix, router, docs.clone());
    let router = docs_source::routes::add(prefix, router, docs.clone());
    let router = session::routes::add(prefix, router, docs.clone());
    let router = sources::routes::add(prefix, router, docs.clone());
    health_check::routes::add(prefix, router, docs.clone())
}
