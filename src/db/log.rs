//! Audit log table helpers.
//!
//! Every mutating domain operation records one row inside its own
//! transaction, so a rolled-back operation leaves no trace.

use chrono::Local;
use rusqlite::{Connection, Result, params};

pub fn log_operation(conn: &Connection, operation: &str, target: &str, message: &str) -> Result<()> {
    let now = Local::now().to_rfc3339();
    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message) VALUES (?1, ?2, ?3, ?4)",
    )?;
    stmt.execute(params![now, operation, target, message])?;
    Ok(())
}

/// Load audit rows, newest first.
pub fn load_log(conn: &Connection) -> Result<Vec<(String, String, String)>> {
    let mut stmt = conn.prepare_cached(
        "SELECT date, operation, message FROM log ORDER BY date DESC, id DESC",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok((row.get(0)?, row.get(1)?, row.get(2)?))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
