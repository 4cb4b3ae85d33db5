//! **docsrc** is a documentation lookup API written in [Rust](https://www.rust-lang.org/).
//!
//! It tells learners where the official documentation of a programming
//! language topic lives, and keeps a log of their learning sessions.
//!
//! # Table of contents
//!
//! - [Features](#features)
//! - [Services](#services)
//! - [Installation](#installation)
//!     - [Configuration](#configuration)
//!     - [Usage](#usage)
//! - [Components](#components)
//! - [Documentation](#documentation)
//!
//! # Features
//!
//! - A catalog of the supported languages and their usual frameworks.
//! - Documentation URL lookup by language and topic, with a per-language
//!   `default` fallback.
//! - Learning sessions persisted in `SQLite3` or `MySQL`.
//! - Optional shared API key authentication.
//! - Hot reload of the language sources file.
//!
//! # Services
//!
//! The application exposes a single REST API. Its endpoints are served at the
//! root and under the `/api/v1` prefix:
//!
//! Endpoint | Description
//! ---|---
//! `GET /languages` | The language catalog
//! `GET /docs-source?language=python&topic=flask` | Resolve a documentation URL
//! `POST /docs-source` | Same, with a json body
//! `POST /session` | Create a learning session
//! `GET /session/{id}` | Get a learning session
//! `GET /sessions/{user_id}` | The learning sessions of a user
//! `POST /sources/reload` | Reload the language sources file
//! `GET /health` | Health check
//!
//! Refer to the [API documentation](crate::servers::apis) for more information.
//!
//! # Installation
//!
//! You only need Rust. `SQLite3` is bundled and the database directory is
//! created on start. Build and run it with:
//!
//! ```text
//! git clone https://github.com/docsrc/docsrc.git \
//!   && cd docsrc \
//!   && cargo build --release
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! The default configuration file is
//! `./share/default/config/docsrc.development.sqlite3.toml`:
//!
//! ```toml
//! [logging]
//! threshold = "info"
//!
//! [core.sources]
//! path = "./share/default/sources/language_sources.json"
//! reload_on_request = false
//!
//! [core.database]
//! driver = "sqlite3"
//! path = "./storage/docsrc/lib/database/sqlite3.db"
//!
//! [http_api]
//! bind_address = "127.0.0.1:8000"
//! ```
//!
//! You can use another file with the `DOCSRC_CONFIG_TOML_PATH` environment
//! variable, inject the whole file content with `DOCSRC_CONFIG_TOML`, or
//! override single values:
//!
//! ```text
//! DOCSRC_HTTP_API__API_KEY="MyApiKey" cargo run
//! ```
//!
//! Refer to the [configuration crate](https://docs.rs/docsrc-configuration)
//! for all the options.
//!
//! ## Usage
//!
//! ```text
//! $ curl "http://127.0.0.1:8000/docs-source?language=Python&topic=flask"
//! {"url":"https://flask.palletsprojects.com/"}
//! ```
//!
//! # Components
//!
//! ```text
//! Delivery layer     Domain layer
//!
//!         REST API |> DocsService
//! ```
//!
//! - The [`core`] module contains the domain logic: the language catalog, the
//!   sources table, the resolver and the session store.
//! - The [`servers`] module contains the REST API and its lifecycle.
//! - The [`bootstrap`] and [`app`] modules build the service from the
//!   configuration and start the jobs.
//!
//! # Documentation
//!
//! - [Core](crate::core)
//! - [REST API](crate::servers::apis)
pub mod app;
pub mod bootstrap;
pub mod core;
pub mod servers;

#[macro_use]
extern crate lazy_static;
