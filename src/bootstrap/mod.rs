//! Application bootstrapping.
//!
//! This module includes all the functions to build the application, its
//! dependencies, and run the jobs.
//!
//! Jobs are tasks executed concurrently. For now there is only one: the
//! documentation lookup REST API.
pub mod app;
pub mod config;
pub mod jobs;
pub mod logging;
