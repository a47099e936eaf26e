//! Database row models for categories, jobs, job records and notes.
//! These are thin wrappers around SQLite rows; the presentation layer never
//! sees them directly (see `crate::models` for the projected snapshots).

use crate::errors::AppError;
use crate::utils::time::{DATE_FORMAT, parse_date, parse_datetime};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Result, Row};

#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub name: String,
}

#[derive(Debug, Clone)]
pub struct JobRow {
    pub id: i64,
    pub name: String,
    pub category: Option<String>, // ⇔ jobs.category (TEXT, nullable FK)
}

#[derive(Debug, Clone)]
pub struct JobRecordRow {
    pub id: i64,
    pub job: JobRow, // joined at query time, like a live FK reference
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>, // NULL ⇔ in progress
}

#[derive(Debug, Clone)]
pub struct NoteRow {
    pub date: NaiveDate,
    pub content: Option<String>,
}

fn datetime_from_text(idx: usize, text: &str) -> Result<NaiveDateTime> {
    parse_datetime(text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            idx,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDateTime(text.to_string())),
        )
    })
}

pub fn map_category_row(row: &Row) -> Result<CategoryRow> {
    Ok(CategoryRow {
        name: row.get("name")?,
    })
}

pub fn map_job_row(row: &Row) -> Result<JobRow> {
    Ok(JobRow {
        id: row.get("id")?,
        name: row.get("name")?,
        category: row.get("category")?,
    })
}

/// Map a joined `job_records × jobs` row, columns in the fixed order
/// `(r.id, r.start, r.end, j.id, j.name, j.category)`.
pub fn map_record_row(row: &Row) -> Result<JobRecordRow> {
    let start_text: String = row.get(1)?;
    let end_text: Option<String> = row.get(2)?;

    let end = match end_text {
        Some(t) => Some(datetime_from_text(2, &t)?),
        None => None,
    };

    Ok(JobRecordRow {
        id: row.get(0)?,
        start: datetime_from_text(1, &start_text)?,
        end,
        job: JobRow {
            id: row.get(3)?,
            name: row.get(4)?,
            category: row.get(5)?,
        },
    })
}

pub fn map_note_row(row: &Row) -> Result<NoteRow> {
    let date_text: String = row.get("date")?;
    let date = parse_date(&date_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(format!(
                "expected {DATE_FORMAT}, got '{date_text}'"
            ))),
        )
    })?;

    Ok(NoteRow {
        date,
        content: row.get("content")?,
    })
}
