//! API resources for the [`docs_source`](crate::servers::apis::v1::context::docs_source)
//! API context.
use serde::{Deserialize, Serialize};

/// The documentation URL of a language topic.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct DocsSource {
    pub url: String,
}
