use std::env;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;
use uuid::Uuid;

/// A language sources file in the temp directory. It is removed when dropped.
pub struct SourcesFile {
    pub path: PathBuf,
}

impl SourcesFile {
    /// # Panics
    ///
    /// Will panic if the file can not be written.
    pub fn new(sources: &Value) -> Self {
        let path = env::temp_dir().join(format!("language_sources_{}.json", Uuid::new_v4()));

        let file = Self { path };
        file.write(sources);
        file
    }

    /// # Panics
    ///
    /// Will panic if the file can not be written.
    pub fn write(&self, sources: &Value) {
        fs::write(&self.path, sources.to_string()).expect("it should write the sources file");
    }

    /// # Panics
    ///
    /// Will panic if the file can not be written.
    pub fn write_raw(&self, content: &str) {
        fs::write(&self.path, content).expect("it should write the sources file");
    }

    /// # Panics
    ///
    /// Will panic if the path is not valid UTF-8.
    pub fn path(&self) -> &str {
        self.path.to_str().expect("the temp dir should be a valid UTF-8 path")
    }
}

impl Drop for SourcesFile {
    fn drop(&mut self) {
        drop(fs::remove_file(&self.path));
    }
}

#[allow(dead_code)]
pub fn invalid_session_ids() -> Vec<String> {
    [
        "0".to_string(),
        "not-a-session-id".to_string(),
        "67e55044-10b1-426f-9247-bb680e5fe0c".to_string(), // 35 chars
        "67e55044-10b1-426f-9247-bb680e5fe0cz".to_string(), // Invalid char
    ]
    .to_vec()
}
