//! Random values that keep parallel test servers apart.
use std::env;
use std::path::PathBuf;

use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

const ID_LENGTH: usize = 16;

/// A random alphanumeric identifier.
#[must_use]
pub fn id() -> String {
    thread_rng()
        .sample_iter(&Alphanumeric)
        .take(ID_LENGTH)
        .map(char::from)
        .collect()
}

/// A not yet existing `SQLite3` database file in the temp directory.
#[must_use]
pub fn sqlite_database_path() -> PathBuf {
    env::temp_dir().join(format!("docsrc_{}.db", id()))
}
