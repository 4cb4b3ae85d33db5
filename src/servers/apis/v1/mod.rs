//! The API version `v1`.
//!
//! The API is organized in the following contexts:
//!
//! Context | Description | Version
//! ---|---|---
//! `Languages` | Supported languages catalog | [`v1`](crate::servers::apis::v1::context::languages)
//! `Docs source` | Documentation URL lookup | [`v1`](crate::servers::apis::v1::context::docs_source)
//! `Session` | Learning sessions | [`v1`](crate::servers::apis::v1::context::session)
//! `Sources` | Sources table maintenance | [`v1`](crate::servers::apis::v1::context::sources)
//! `Health check` | Service health | [`v1`](crate::servers::apis::v1::context::health_check)
//!
//! Every endpoint is served at the root and under the `/api/v1` prefix.
//!
//! Refer to the [authentication middleware](crate::servers::apis::v1::middlewares::auth)
//! for more information about the authentication process.
pub mod context;
pub mod middlewares;
pub mod responses;
pub mod routes;
