//! The `SQLite3` database driver.
use std::fs;
use std::panic::Location;
use std::path::Path;

use docsrc_primitives::session_id::SessionId;
use docsrc_primitives::DatabaseDriver;
use r2d2::Pool;
use r2d2_sqlite::rusqlite::{params, Row};
use r2d2_sqlite::SqliteConnectionManager;

use super::{Database, Error, SessionRow};
use crate::core::sessions::SessionRecord;

const DRIVER: DatabaseDriver = DatabaseDriver::Sqlite3;

pub struct Sqlite {
    pool: Pool<SqliteConnectionManager>,
}

impl Sqlite {
    /// It instantiates a new `SQLite3` database driver.
    ///
    /// The directory of the database file is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `SqLite` database.
    pub fn new(db_path: &str) -> Result<Sqlite, Error> {
        if let Some(parent) = Path::new(db_path).parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| (e, DRIVER))?;
        }

        let cm = SqliteConnectionManager::file(db_path);
        Pool::new(cm).map_or_else(|err| Err((err, DRIVER).into()), |pool| Ok(Sqlite { pool }))
    }
}

fn session_row(row: &Row<'_>) -> Result<SessionRow, r2d2_sqlite::rusqlite::Error> {
    Ok(SessionRow {
        id: row.get(0)?,
        user_id: row.get(1)?,
        language: row.get(2)?,
        topic: row.get(3)?,
        created_at: row.get(4)?,
    })
}

impl Database for Sqlite {
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_sessions_table = "
        CREATE TABLE IF NOT EXISTS sessions (
            id TEXT PRIMARY KEY NOT NULL,
            user_id TEXT,
            language TEXT NOT NULL,
            topic TEXT NOT NULL,
            created_at INTEGER NOT NULL
        );"
        .to_string();

        let create_sessions_user_index = "
        CREATE INDEX IF NOT EXISTS sessions_user_id ON sessions (user_id);"
            .to_string();

        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.execute(&create_sessions_table, [])?;
        conn.execute(&create_sessions_user_index, [])?;

        Ok(())
    }

    /// Refer to [`databases::Database::ping`](crate::core::databases::Database::ping).
    fn ping(&self) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_row("SELECT 1", [], |row| row.get::<_, i64>(0))?;

        Ok(())
    }

    /// Refer to [`databases::Database::insert_session`](crate::core::databases::Database::insert_session).
    fn insert_session(&self, session: &SessionRecord) -> Result<(), Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = SessionRow::from_record(session);

        let insert = conn.execute(
            "INSERT INTO sessions (id, user_id, language, topic, created_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![row.id, row.user_id, row.language, row.topic, row.created_at],
        )?;

        if insert == 0 {
            Err(Error::InsertFailed {
                location: Location::caller(),
                driver: DRIVER,
            })
        } else {
            Ok(())
        }
    }

    /// Refer to [`databases::Database::get_session`](crate::core::databases::Database::get_session).
    fn get_session(&self, id: &SessionId) -> Result<Option<SessionRecord>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, user_id, language, topic, created_at FROM sessions WHERE id = ?")?;

        let mut rows = stmt.query([id.to_string()])?;

        let row = rows.next()?.map(session_row).transpose()?;

        row.map(|row| row.into_record(DRIVER)).transpose()
    }

    /// Refer to [`databases::Database::load_sessions_by_user`](crate::core::databases::Database::load_sessions_by_user).
    fn load_sessions_by_user(&self, user_id: &str) -> Result<Vec<SessionRecord>, Error> {
        let conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let mut stmt = conn.prepare("SELECT id, user_id, language, topic, created_at FROM sessions WHERE user_id = ?")?;

        let rows = stmt
            .query_map([user_id], session_row)?
            .collect::<Result<Vec<SessionRow>, _>>()?;

        rows.into_iter().map(|row| row.into_record(DRIVER)).collect()
    }
}
