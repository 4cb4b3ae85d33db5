//! API routes for the [`session`](crate::servers::apis::v1::context::session)
//! API context.
//!
//! - `POST /session`
//! - `GET /session/{id}`
//! - `GET /sessions/{user_id}`
//!
//! Refer to the [API endpoint documentation](crate::servers::apis::v1::context::session).
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{create_session_handler, get_session_handler, get_user_sessions_handler};
use crate::core::DocsService;

/// It adds the routes to the router for the [`session`](crate::servers::apis::v1::context::session) API context.
pub fn add(prefix: &str, router: Router, docs: Arc<DocsService>) -> Router {
    router
        .route(
            &format!("{prefix}/session"),
            post(create_session_handler).with_state(docs.clone()),
        )
        .route(
            &format!("{prefix}/session/{{id}}"),
            get(get_session_handler).with_state(docs.clone()),
        )
        .route(
            &format!("{prefix}/sessions/{{user_id}}"),
            get(get_user_sessions_handler).with_state(docs),
        )
}
