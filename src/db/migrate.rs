//! Schema migration engine driven by `PRAGMA user_version`.
//!
//! Each migration is applied once, in order, inside its own transaction.
//! `init_db` calls this on every startup so a fresh file and an old file end
//! up with the same schema.

use rusqlite::{Connection, Result};

const MIGRATIONS: &[(i64, &str)] = &[(
    1,
    r#"
    CREATE TABLE IF NOT EXISTS categories (
        name TEXT PRIMARY KEY
    );

    CREATE TABLE IF NOT EXISTS jobs (
        id       INTEGER PRIMARY KEY AUTOINCREMENT,
        name     TEXT NOT NULL,
        category TEXT REFERENCES categories(name),
        UNIQUE (name, category)
    );

    CREATE TABLE IF NOT EXISTS job_records (
        id     INTEGER PRIMARY KEY AUTOINCREMENT,
        job_id INTEGER NOT NULL REFERENCES jobs(id),
        start  TEXT NOT NULL,              -- YYYY-MM-DD HH:MM:SS
        end    TEXT                        -- NULL while in progress
    );

    CREATE TABLE IF NOT EXISTS notes (
        date    TEXT PRIMARY KEY,          -- YYYY-MM-DD
        content TEXT
    );

    CREATE TABLE IF NOT EXISTS log (
        id        INTEGER PRIMARY KEY AUTOINCREMENT,
        date      TEXT NOT NULL,
        operation TEXT NOT NULL,
        target    TEXT DEFAULT '',
        message   TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_job_records_start ON job_records(start);
    "#,
)];

fn schema_version(conn: &Connection) -> Result<i64> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
}

fn set_schema_version(conn: &Connection, version: i64) -> Result<()> {
    // PRAGMA does not accept bound parameters
    conn.execute_batch(&format!("PRAGMA user_version = {version}"))
}

/// Apply every migration newer than the file's current version.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    let current = schema_version(conn)?;

    for (version, sql) in MIGRATIONS {
        if *version <= current {
            continue;
        }
        conn.execute_batch("BEGIN")?;
        match conn
            .execute_batch(sql)
            .and_then(|_| set_schema_version(conn, *version))
        {
            Ok(()) => conn.execute_batch("COMMIT")?,
            Err(e) => {
                conn.execute_batch("ROLLBACK").ok();
                return Err(e);
            }
        }
    }

    Ok(())
}

/// Count migrations that have not been applied yet.
pub fn pending_migrations(conn: &Connection) -> Result<usize> {
    let current = schema_version(conn)?;
    Ok(MIGRATIONS.iter().filter(|(v, _)| *v > current).count())
}
