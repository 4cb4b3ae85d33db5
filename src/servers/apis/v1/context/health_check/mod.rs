//! API health check endpoint.
//!
//! It is used to check if the service is running and can reach its session
//! store. Especially for containers.
//!
//! # Endpoints
//!
//! - [Health Check](#health-check)
//!
//! # Health Check
//!
//! `GET /health`
//!
//! Returns the API status. Like every other route, it requires the API key
//! when one is configured.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/health"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "healthy"
//! }
//! ```
//!
//! When the session store does not answer it returns a `500` with a `detail`.
//!
//! **Resource**
//!
//! Refer to the API [`Report`](crate::servers::apis::v1::context::health_check::resources::Report)
//! resource for more information about the response attributes.
pub mod handlers;
pub mod resources;
pub mod routes;
