//! API routes for the [`sources`](crate::servers::apis::v1::context::sources) API context.
//!
//! - `POST /sources/reload`
use std::sync::Arc;

use axum::routing::post;
use axum::Router;

use super::handlers::reload_sources_handler;
use crate::core::DocsService;

/// It adds the routes to the router for the [`sources`](crate::servers::apis::v1::context::sources) API context.
pub fn add(prefix: &str, router: Router, docs: Arc<DocsService>) -> Router {
    router.route(
        &format!("{prefix}/sources/reload"),
        post(reload_sources_handler).with_state(docs),
    )
}
