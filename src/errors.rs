//! Error types for the three layers of the application.
//!
//! The persistence tier (db) raises `CrudError`, the domain tier (core)
//! collapses everything into a single `LogicError`, and `AppError` is the
//! unified type returned by CLI handlers.

use std::io;
use thiserror::Error;

/// Persistence-tier error.
///
/// Duplicate rows are reported as `AlreadyExists` whether they are caught by
/// the explicit pre-insert probe or by the SQLite UNIQUE constraint at
/// execution time, so callers see one error regardless of which transaction
/// committed the original row.
#[derive(Error, Debug)]
pub enum CrudError {
    #[error("{0} already exists.")]
    AlreadyExists(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),
}

impl CrudError {
    /// Map a rusqlite error to `AlreadyExists` when it is a constraint
    /// violation, keeping it as a plain `Db` error otherwise.
    pub fn from_sqlite(err: rusqlite::Error, entity: &str) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                CrudError::AlreadyExists(entity.to_string())
            }
            _ => CrudError::Db(err),
        }
    }
}

/// Domain-tier error: the single type surfaced to callers for every
/// business-rule and persistence failure. The message carries the detail;
/// callers only distinguish success from failure.
#[derive(Error, Debug)]
#[error("{message}")]
pub struct LogicError {
    message: String,
}

impl LogicError {
    pub fn new<M: Into<String>>(message: M) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<CrudError> for LogicError {
    fn from(err: CrudError) -> Self {
        Self {
            message: err.to_string(),
        }
    }
}

impl From<rusqlite::Error> for LogicError {
    fn from(err: rusqlite::Error) -> Self {
        Self {
            message: format!("Database error: {err}"),
        }
    }
}

/// Unified application error for the CLI layer.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("{0}")]
    Logic(#[from] LogicError),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid datetime format: {0}")]
    InvalidDateTime(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("Internal error: {0}")]
    Other(String),
}

impl From<CrudError> for AppError {
    fn from(err: CrudError) -> Self {
        AppError::Logic(LogicError::from(err))
    }
}

pub type AppResult<T> = Result<T, AppError>;
