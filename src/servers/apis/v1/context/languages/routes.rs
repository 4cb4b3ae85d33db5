//! API routes for the [`languages`](crate::servers::apis::v1::context::languages)
//! API context.
//!
//! - `GET /languages`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::languages).
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::get_languages_handler;
use crate::core::DocsService;

/// It adds the routes to the router for the [`languages`](crate::servers::apis::v1::context::languages) API context.
pub fn add(prefix: &str, router: Router, docs: Arc<DocsService>) -> Router {
    router.route(&format!("{prefix}/languages"), get(get_languages_handler).with_state(docs))
}
