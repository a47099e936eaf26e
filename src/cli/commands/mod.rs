pub mod category;
pub mod db;
pub mod init;
pub mod job;
pub mod log;
pub mod note;
pub mod record;
pub mod timer;

use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::time;
use chrono::{Local, NaiveDate, NaiveDateTime};

/// Open the configured database and make sure the schema is current.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::open(cfg)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// Parse an optional "YYYY-MM-DD" argument, defaulting to today.
pub(crate) fn parse_date_or_today(arg: Option<&str>) -> AppResult<NaiveDate> {
    match arg {
        None => Ok(Local::now().date_naive()),
        Some(s) => {
            time::parse_date(s).ok_or_else(|| crate::errors::AppError::InvalidDate(s.to_string()))
        }
    }
}

/// Parse a "YYYY-MM-DD HH:MM[:SS]" argument.
pub(crate) fn parse_datetime_arg(s: &str) -> AppResult<NaiveDateTime> {
    time::parse_datetime(s).ok_or_else(|| crate::errors::AppError::InvalidDateTime(s.to_string()))
}
