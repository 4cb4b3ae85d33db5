use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::validator::{SemanticValidationError, Validator};

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Sources {
    /// Path to the JSON file with the documentation URL of every topic for
    /// each language. For example:
    ///
    /// ```json
    /// { "python": { "default": "https://docs.python.org/3/" } }
    /// ```
    #[serde(default = "Sources::default_path")]
    pub path: Utf8PathBuf,

    /// When enabled, the file is read again for every resolution request
    /// instead of being loaded once when the server starts.
    #[serde(default = "Sources::default_reload_on_request")]
    pub reload_on_request: bool,
}

impl Default for Sources {
    fn default() -> Self {
        Self {
            path: Self::default_path(),
            reload_on_request: Self::default_reload_on_request(),
        }
    }
}

impl Sources {
    fn default_path() -> Utf8PathBuf {
        Utf8PathBuf::from("./share/default/sources/language_sources.json")
    }

    fn default_reload_on_request() -> bool {
        false
    }
}

impl Validator for Sources {
    fn validate(&self) -> Result<(), SemanticValidationError> {
        if self.path.as_str().trim().is_empty() {
            return Err(SemanticValidationError::EmptySourcesPath);
        }
        Ok(())
    }
}
