use serde::{Deserialize, Serialize};

/// Lookup parameters, from the query string or the json body.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct DocsSourceForm {
    pub language: Option<String>,
    pub topic: Option<String>,
}
