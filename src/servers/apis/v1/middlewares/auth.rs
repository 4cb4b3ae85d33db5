//! Authentication middleware for the API.
//!
//! It uses the `x-api-key` request header to authenticate the client:
//!
//! ```bash
//! curl -H "x-api-key: MyApiKey" "http://127.0.0.1:8000/languages"
//! ```
//!
//! The key must be the `api_key` in the
//! [HTTP API configuration](docsrc_configuration::HttpApi):
//!
//! ```toml
//! [http_api]
//! api_key = "MyApiKey"
//! ```
//!
//! When the key is configured every endpoint requires it. When it is not, the
//! middleware is not installed at all.
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use docsrc_configuration::HttpApi;

use crate::servers::apis::v1::responses::unauthorized_response;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware for authentication using the `x-api-key` header.
pub async fn auth(State(config): State<Arc<HttpApi>>, request: Request, next: Next) -> Response {
    let Some(api_key) = request.headers().get(API_KEY_HEADER) else {
        return AuthError::MissingApiKey.into_response();
    };

    if !authenticate(api_key.to_str().unwrap_or_default(), &config) {
        return AuthError::InvalidApiKey.into_response();
    }

    next.run(request).await
}

enum AuthError {
    /// Missing key for authentication.
    MissingApiKey,
    /// Key was provided but it is not valid.
    InvalidApiKey,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            AuthError::MissingApiKey => unauthorized_response("missing api key"),
            AuthError::InvalidApiKey => unauthorized_response("invalid api key"),
        }
    }
}

fn authenticate(api_key: &str, http_api_config: &HttpApi) -> bool {
    !api_key.is_empty() && http_api_config.accepts_key(api_key)
}
