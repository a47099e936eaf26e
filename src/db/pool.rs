//! SQLite connection wrapper (lightweight for CLI usage).
//!
//! The handle is constructed once at startup and passed explicitly to the
//! logic layer; there is no ambient global connection.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OpenFlags, Result};
use std::path::Path;

#[derive(Debug)]
pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    pub fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(Path::new(path))?;
        Ok(Self { conn })
    }

    /// Open the database described by the configuration, honoring the
    /// `create_db` flag: when it is false a missing file is an error rather
    /// than an implicit creation. Other open failures (permissions,
    /// corruption) propagate as database errors.
    pub fn open(cfg: &Config) -> AppResult<Self> {
        if cfg.create_db {
            return Ok(Self::new(&cfg.database)?);
        }

        let path = Path::new(&cfg.database);
        if !path.exists() {
            return Err(AppError::Config(format!(
                "Database '{}' does not exist and create_db is disabled",
                cfg.database
            )));
        }

        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)?;
        Ok(Self { conn })
    }
}
