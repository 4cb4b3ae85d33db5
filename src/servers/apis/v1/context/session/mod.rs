//! Learning sessions API context.
//!
//! A learning session records a documentation lookup for a language topic,
//! optionally on behalf of a user.
//!
//! # Endpoints
//!
//! - [Create a session](#create-a-session)
//! - [Get a session](#get-a-session)
//! - [List the sessions of a user](#list-the-sessions-of-a-user)
//!
//! # Create a session
//!
//! `POST /session`
//!
//! **Body** (json)
//!
//! Name | Type | Description | Required | Example
//! ---|---|---|---|---
//! `language` | string | The language. It is stored in lowercase. | Yes | `Python`
//! `topic` | string | The topic. Defaults to `default`. | No | `basics`
//! `user_id` | string | The user the session belongs to. | No | `u1`
//!
//! **Example request**
//!
//! ```bash
//! curl -X POST "http://127.0.0.1:8000/session" \
//!      -H "Content-Type: application/json" \
//!      -d '{"language": "Python", "topic": "basics", "user_id": "u1"}'
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "session_id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
//!     "message": "session created"
//! }
//! ```
//!
//! A body that is not valid json, or without `language`, gets a `400`.
//!
//! # Get a session
//!
//! `GET /session/:id`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/session/67e55044-10b1-426f-9247-bb680e5fe0c8"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
//!     "user_id": "u1",
//!     "language": "python",
//!     "topic": "basics",
//!     "created_at": "2024-06-11T18:40:00.123456Z"
//! }
//! ```
//!
//! It returns a `400` if the id is not a session id and a `404` if there is
//! no session with that id.
//!
//! # List the sessions of a user
//!
//! `GET /sessions/:user_id`
//!
//! **Example request**
//!
//! ```bash
//! curl "http://127.0.0.1:8000/sessions/u1"
//! ```
//!
//! **Example response** `200`
//!
//! ```json
//! {
//!     "sessions": [
//!         {
//!             "id": "67e55044-10b1-426f-9247-bb680e5fe0c8",
//!             "user_id": "u1",
//!             "language": "python",
//!             "topic": "basics",
//!             "created_at": "2024-06-11T18:40:00.123456Z"
//!         }
//!     ]
//! }
//! ```
//!
//! The list is empty when the user has no sessions.
//!
//! **Resource**
//!
//! Refer to the API [`Session`](crate::servers::apis::v1::context::session::resources::Session)
//! resource for more information about the response attributes.
pub mod forms;
pub mod handlers;
pub mod resources;
pub mod responses;
pub mod routes;
