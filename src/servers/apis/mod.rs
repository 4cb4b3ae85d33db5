//! The documentation lookup REST API.
//!
//! It exposes the [`DocsService`](crate::core::DocsService) over HTTP:
//!
//! - The supported [languages](crate::servers::apis::v1::context::languages).
//! - The [documentation source](crate::servers::apis::v1::context::docs_source)
//!   of a language topic.
//! - The [learning sessions](crate::servers::apis::v1::context::session).
//! - Reloading the [sources table](crate::servers::apis::v1::context::sources).
//! - A [health check](crate::servers::apis::v1::context::health_check).
//!
//! # Configuration
//!
//! The API is configured in the `[http_api]` section:
//!
//! ```toml
//! [http_api]
//! bind_address = "0.0.0.0:8000"
//! api_key = "MyApiKey"
//!
//! [http_api.tsl_config]
//! ssl_cert_path = "./storage/docsrc/lib/tls/localhost.crt"
//! ssl_key_path = "./storage/docsrc/lib/tls/localhost.key"
//! ```
//!
//! The TLS section is optional. Without it the API is served over plain HTTP.
//!
//! # Authentication
//!
//! When `api_key` is set every request must carry it in the `x-api-key`
//! header, otherwise the API answers with a `401`:
//!
//! ```json
//! { "detail": "missing api key" }
//! ```
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth).
//!
//! # Errors
//!
//! All the errors are json objects with a `detail` attribute:
//!
//! Status | When
//! ---|---
//! `400` | Missing or invalid parameters, invalid body, invalid session id.
//! `401` | Missing or invalid API key.
//! `404` | Unknown language or topic, unknown session.
//! `500` | The session store or the sources file failed.
//!
//! # Versioning
//!
//! There is only one version, `v1`. Its endpoints are served at the root and
//! under the `/api/v1` prefix.
pub mod blocking;
pub mod routes;
pub mod server;
pub mod v1;

/// Target of the API log events.
pub const API_LOG_TARGET: &str = "API";
