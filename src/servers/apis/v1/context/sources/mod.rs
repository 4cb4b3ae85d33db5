//! Documentation sources API context.
//!
//! The sources table is loaded from a JSON file when the service starts.
//! This context lets an operator load it again after editing the file,
//! without restarting the service.
//!
//! # Endpoints
//!
//! - [Reload the sources](#reload-the-sources)
//!
//! # Reload the sources
//!
//! `POST /sources/reload`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/sources/reload"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "status": "ok"
//! }
//! ```
//!
//! If the file is missing or malformed the previous table stays in use and
//! the endpoint returns a `500`:
//!
//! ```json
//! {
//!     "detail": "failed to reload the language sources"
//! }
//! ```
pub mod handlers;
pub mod routes;
