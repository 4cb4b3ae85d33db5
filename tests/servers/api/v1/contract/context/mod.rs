pub mod docs_source;
pub mod health_check;
pub mod languages;
pub mod session;
pub mod sources;
