//! API routes for the [`docs_source`](crate::servers::apis::v1::context::docs_source)
//! API context.
//!
//! - `GET /docs-source`
//! - `POST /docs-source`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::docs_source).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{get_docs_source_handler, post_docs_source_handler};
use crate::core::DocsService;

/// It adds the routes to the router for the [`docs_source`](crate::servers::apis::v1::context::docs_source) API context.
pub fn add(prefix: &str, router: Router, docs: Arc<DocsService>) -> Router {
    router.route(
        &format!("{prefix}/docs-source"),
        get(get_docs_source_handler).post(post_docs_source_handler).with_state(docs),
    )
}
