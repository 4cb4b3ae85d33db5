//! API handlers for the [`health_check`](crate::servers::apis::v1::context::health_check)
//! API context.
use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use super::resources::{Report, Status};
use crate::core::DocsService;
use crate::servers::apis::{blocking, API_LOG_TARGET};
use crate::servers::apis::v1::responses::error_response;

/// Detail of the `500` response when the session store can not be reached.
pub const STORE_UNAVAILABLE: &str = "session store unavailable";

/// Endpoint for container health check.
///
/// It pings the session store. The failure is logged and the client gets a
/// `500` with a short detail.
pub async fn health_check_handler(State(docs): State<Arc<DocsService>>) -> Response {
    let result = match blocking::run(docs, |docs| docs.health_check()).await {
        Ok(result) => result.map_err(|e| e.to_string()),
        Err(e) => Err(e.to_string()),
    };

    match result {
        Ok(()) => Json(Report {
            status: Status::Healthy,
        })
        .into_response(),
        Err(e) => {
            tracing::error!(target: API_LOG_TARGET, "health check failed: {e}");

            error_response(StatusCode::INTERNAL_SERVER_ERROR, STORE_UNAVAILABLE)
        }
    }
}
