//! API routes for the [`health_check`](crate::servers::apis::v1::context::health_check) API context.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::health_check_handler;
use crate::core::DocsService;

/// It adds the routes to the router for the [`health_check`](crate::servers::apis::v1::context::health_check) API context.
pub fn add(prefix: &str, router: Router, docs: Arc<DocsService>) -> Router {
    router.route(&format!("{prefix}/health"), get(health_check_handler).with_state(docs))
}
