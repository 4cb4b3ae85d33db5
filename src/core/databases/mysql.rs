//! The `MySQL` database driver.
use std::panic::Location;

use docsrc_primitives::session_id::SessionId;
use docsrc_primitives::DatabaseDriver;
use r2d2::Pool;
use r2d2_mysql::mysql::prelude::Queryable;
use r2d2_mysql::mysql::{params, Opts, OptsBuilder};
use r2d2_mysql::MySqlConnectionManager;

use super::{Database, Error, SessionRow};
use crate::core::sessions::SessionRecord;

const DRIVER: DatabaseDriver = DatabaseDriver::MySQL;

type SessionColumns = (String, Option<String>, String, String, i64);

pub struct Mysql {
    pool: Pool<MySqlConnectionManager>,
}

impl Mysql {
    /// It instantiates a new `MySQL` database driver.
    ///
    /// # Errors
    ///
    /// Will return `r2d2::Error` if `db_path` is not able to create `MySQL` database.
    pub fn new(db_path: &str) -> Result<Self, Error> {
        let opts = Opts::from_url(db_path)?;
        let builder = OptsBuilder::from_opts(opts);
        let manager = MySqlConnectionManager::new(builder);
        let pool = r2d2::Pool::builder().build(manager).map_err(|e| (e, DRIVER))?;

        Ok(Self { pool })
    }
}

fn session_row((id, user_id, language, topic, created_at): SessionColumns) -> SessionRow {
    SessionRow {
        id,
        user_id,
        language,
        topic,
        created_at,
    }
}

impl Database for Mysql {
    /// Refer to [`databases::Database::create_database_tables`](crate::core::databases::Database::create_database_tables).
    fn create_database_tables(&self) -> Result<(), Error> {
        let create_sessions_table = "
        CREATE TABLE IF NOT EXISTS `sessions` (
          `id` CHAR(36) NOT NULL,
          `user_id` VARCHAR(255) NULL,
          `language` VARCHAR(64) NOT NULL,
          `topic` VARCHAR(255) NOT NULL,
          `created_at` BIGINT NOT NULL,
          PRIMARY KEY (`id`),
          INDEX `sessions_user_id` (`user_id`)
        );"
        .to_string();

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop(&create_sessions_table)?;

        Ok(())
    }

    /// Refer to [`databases::Database::ping`](crate::core::databases::Database::ping).
    fn ping(&self) -> Result<(), Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        conn.query_drop("SELECT 1")?;

        Ok(())
    }

    /// Refer to [`databases::Database::insert_session`](crate::core::databases::Database::insert_session).
    fn insert_session(&self, session: &SessionRecord) -> Result<(), Error> {
        const COMMAND: &str = "INSERT INTO `sessions` (`id`, `user_id`, `language`, `topic`, `created_at`) VALUES (:id, :user_id, :language, :topic, :created_at)";

        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let row = SessionRow::from_record(session);

        conn.exec_drop(
            COMMAND,
            params! {
                "id" => row.id,
                "user_id" => row.user_id,
                "language" => row.language,
                "topic" => row.topic,
                "created_at" => row.created_at,
            },
        )?;

        if conn.affected_rows() == 0 {
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
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let select = conn.exec_first::<SessionColumns, _, _>(
            "SELECT `id`, `user_id`, `language`, `topic`, `created_at` FROM `sessions` WHERE `id` = :id",
            params! { "id" => id.to_string() },
        )?;

        select.map(|columns| session_row(columns).into_record(DRIVER)).transpose()
    }

    /// Refer to [`databases::Database::load_sessions_by_user`](crate::core::databases::Database::load_sessions_by_user).
    fn load_sessions_by_user(&self, user_id: &str) -> Result<Vec<SessionRecord>, Error> {
        let mut conn = self.pool.get().map_err(|e| (e, DRIVER))?;

        let rows = conn.exec_map(
            "SELECT `id`, `user_id`, `language`, `topic`, `created_at` FROM `sessions` WHERE `user_id` = :user_id",
            params! { "user_id" => user_id },
            session_row,
        )?;

        rows.into_iter().map(|row| row.into_record(DRIVER)).collect()
    }
}
