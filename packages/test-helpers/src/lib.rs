//! Testing helpers for the [docsrc](https://docs.rs/docsrc) API server.
//!
//! The configurations built here use random database paths and ephemeral
//! ports so that several servers can run in parallel test threads.
pub mod configuration;
pub mod random;
