//! Documentation source API context.
//!
//! It resolves a language and a topic into the URL of their documentation.
//!
//! # Endpoints
//!
//! - [Resolve a documentation source](#resolve-a-documentation-source)
//!
//! # Resolve a documentation source
//!
//! `GET /docs-source?language=:language&topic=:topic`
//!
//! `POST /docs-source` with a json body `{"language": ":language", "topic": ":topic"}`
//!
//! **Parameters**
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `language` | string | The language name or slug. Case-insensitive. | Yes | `Python`
//! `topic` | string | The topic. Case-sensitive. Defaults to `default`. | No | `flask`
//!
//! When the language does not have the requested topic, the URL of its
//! `default` topic is returned.
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/docs-source?language=Python&topic=default"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "url": "https://docs.python.org/3/"
//! }
//! ```
//!
//! **Not found response** `404`
//!
//! When the language is unknown, or it has neither the topic nor a default:
//!
//! ```json
//! {
//!     "detail": "Language not found: ruby"
//! }
//! ```
//!
//! **Bad request response** `400`
//!
//! When the `language` parameter is missing or empty.
//!
//! **Resource**
//!
//! Refer to the API [`DocsSource`](crate::servers::apis::v1::context::docs_source::resources::DocsSource)
//! resource for more information about the response attributes.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
