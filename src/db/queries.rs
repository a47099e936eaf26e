//! Persistence-tier operations: typed insert/select/update per entity.
//!
//! Every function takes a plain `&Connection` so it can run inside a
//! transaction opened by the logic layer. Business validation does not live
//! here; the only rules enforced are the uniqueness constraints the schema
//! cannot express on its own (NULL categories never collide under SQL
//! UNIQUE, so the duplicate probe for jobs is explicit).

use crate::db::models::{
    CategoryRow, JobRecordRow, JobRow, NoteRow, map_category_row, map_job_row, map_note_row,
    map_record_row,
};
use crate::errors::CrudError;
use crate::utils::time::{format_date, format_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, params};

const RECORD_COLUMNS: &str = "r.id, r.start, r.end, j.id, j.name, j.category";

// ---------------------------
// Categories
// ---------------------------

/// Insert a category. A duplicate name, whether found by the probe or by the
/// PRIMARY KEY constraint, surfaces as `AlreadyExists`.
pub fn insert_category(conn: &Connection, name: &str) -> Result<(), CrudError> {
    let entity = format!("Category(name={name})");

    if select_one_category_by_name(conn, name)?.is_some() {
        return Err(CrudError::AlreadyExists(entity));
    }

    conn.execute("INSERT INTO categories (name) VALUES (?1)", params![name])
        .map_err(|e| CrudError::from_sqlite(e, &entity))?;
    Ok(())
}

/// All categories ordered by name ascending.
pub fn select_all_categories(conn: &Connection) -> Result<Vec<CategoryRow>, CrudError> {
    let mut stmt = conn.prepare_cached("SELECT name FROM categories ORDER BY name ASC")?;
    let rows = stmt.query_map([], map_category_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_one_category_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<CategoryRow>, CrudError> {
    let mut stmt = conn.prepare_cached("SELECT name FROM categories WHERE name = ?1")?;
    Ok(stmt.query_row(params![name], map_category_row).optional()?)
}

// ---------------------------
// Jobs
// ---------------------------

/// Insert a job, optionally tied to an existing category.
///
/// The `(name, category)` pair must be unique including the no-category case,
/// which the schema's UNIQUE constraint cannot catch (NULL != NULL in SQL),
/// hence the explicit probe with `IS` before the insert.
pub fn insert_job(conn: &Connection, name: &str, category: Option<&str>) -> Result<(), CrudError> {
    let entity = match category {
        Some(c) => format!("Job(name={name}, category={c})"),
        None => format!("Job(name={name})"),
    };

    let mut stmt =
        conn.prepare_cached("SELECT id, name, category FROM jobs WHERE name = ?1 AND category IS ?2")?;
    let existing = stmt
        .query_row(params![name, category], map_job_row)
        .optional()?;
    if existing.is_some() {
        return Err(CrudError::AlreadyExists(entity));
    }

    conn.execute(
        "INSERT INTO jobs (name, category) VALUES (?1, ?2)",
        params![name, category],
    )
    .map_err(|e| CrudError::from_sqlite(e, &entity))?;
    Ok(())
}

/// All jobs ordered by category name then job name. Jobs without a category
/// sort first (pinned with NULLS FIRST rather than inherited from the store).
pub fn select_all_jobs(conn: &Connection) -> Result<Vec<JobRow>, CrudError> {
    let mut stmt = conn.prepare_cached(
        "SELECT id, name, category FROM jobs
         ORDER BY category ASC NULLS FIRST, name ASC",
    )?;
    let rows = stmt.query_map([], map_job_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_one_job_by_id(conn: &Connection, id: i64) -> Result<Option<JobRow>, CrudError> {
    let mut stmt = conn.prepare_cached("SELECT id, name, category FROM jobs WHERE id = ?1")?;
    Ok(stmt.query_row(params![id], map_job_row).optional()?)
}

// ---------------------------
// Job records
// ---------------------------

/// Insert a record. No business validation here; that is the logic layer's
/// job. Returns the assigned row id.
pub fn insert_job_record(
    conn: &Connection,
    job_id: i64,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
) -> Result<i64, CrudError> {
    conn.execute(
        "INSERT INTO job_records (job_id, start, end) VALUES (?1, ?2, ?3)",
        params![job_id, format_datetime(start), end.map(format_datetime)],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Full in-place replacement of job/start/end.
pub fn update_job_record(
    conn: &Connection,
    record_id: i64,
    job_id: i64,
    start: NaiveDateTime,
    end: Option<NaiveDateTime>,
) -> Result<(), CrudError> {
    conn.execute(
        "UPDATE job_records SET job_id = ?1, start = ?2, end = ?3 WHERE id = ?4",
        params![
            job_id,
            format_datetime(start),
            end.map(format_datetime),
            record_id
        ],
    )?;
    Ok(())
}

/// Convenience wrapper: replace only `end`, keeping the record's job/start.
pub fn update_job_record_end(
    conn: &Connection,
    record: &JobRecordRow,
    end: Option<NaiveDateTime>,
) -> Result<(), CrudError> {
    update_job_record(conn, record.id, record.job.id, record.start, end)
}

/// Finished records whose start AND end both fall on `date`,
/// ordered by (start, id).
pub fn select_all_finished_records_by_date(
    conn: &Connection,
    date: NaiveDate,
) -> Result<Vec<JobRecordRow>, CrudError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {RECORD_COLUMNS}
         FROM job_records r JOIN jobs j ON j.id = r.job_id
         WHERE r.end IS NOT NULL AND date(r.start) = ?1 AND date(r.end) = ?1
         ORDER BY r.start ASC, r.id ASC"
    ))?;
    let rows = stmt.query_map(params![format_date(date)], map_record_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn select_one_record_by_id(
    conn: &Connection,
    id: i64,
) -> Result<Option<JobRecordRow>, CrudError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {RECORD_COLUMNS}
         FROM job_records r JOIN jobs j ON j.id = r.job_id
         WHERE r.id = ?1"
    ))?;
    Ok(stmt.query_row(params![id], map_record_row).optional()?)
}

/// The record started on `date` with no end yet, if any.
pub fn select_one_in_progress_record_by_date(
    conn: &Connection,
    date: NaiveDate,
) -> Result<Option<JobRecordRow>, CrudError> {
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT {RECORD_COLUMNS}
         FROM job_records r JOIN jobs j ON j.id = r.job_id
         WHERE r.end IS NULL AND date(r.start) = ?1
         LIMIT 1"
    ))?;
    Ok(stmt
        .query_row(params![format_date(date)], map_record_row)
        .optional()?)
}

// ---------------------------
// Notes
// ---------------------------

/// Insert the note for `date`, or overwrite its content if one exists.
pub fn upsert_note(conn: &Connection, date: NaiveDate, content: &str) -> Result<(), CrudError> {
    let date_text = format_date(date);
    let updated = conn.execute(
        "UPDATE notes SET content = ?1 WHERE date = ?2",
        params![content, date_text],
    )?;
    if updated == 0 {
        conn.execute(
            "INSERT INTO notes (date, content) VALUES (?1, ?2)",
            params![date_text, content],
        )?;
    }
    Ok(())
}

pub fn select_one_note_by_date(
    conn: &Connection,
    date: NaiveDate,
) -> Result<Option<NoteRow>, CrudError> {
    let mut stmt = conn.prepare_cached("SELECT date, content FROM notes WHERE date = ?1")?;
    Ok(stmt
        .query_row(params![format_date(date)], map_note_row)
        .optional()?)
}
