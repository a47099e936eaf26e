use crate::db::log::log_operation;
use crate::db::models::JobRow;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::LogicError;
use crate::models::JobRecordView;
use crate::utils::time::truncate_to_minute;
use chrono::{Local, NaiveDate, NaiveDateTime};
use rusqlite::{Connection, TransactionBehavior};

/// High-level business logic for job records: manual interval registration,
/// revision, and the start/stop timer.
pub struct RecordLogic;

impl RecordLogic {
    /// Shared validation for register/revise/start. Checks, in order:
    /// start not in the future, the job exists, and when an end is given:
    /// end not in the future, end strictly after start, both on the same
    /// calendar date. Returns the resolved job row.
    fn validate_interval(
        conn: &Connection,
        job_id: i64,
        start: NaiveDateTime,
        end: Option<NaiveDateTime>,
    ) -> Result<JobRow, LogicError> {
        let now = Local::now().naive_local();

        if start > now {
            return Err(LogicError::new("Start time cannot be set at future time."));
        }

        let job = queries::select_one_job_by_id(conn, job_id)?
            .ok_or_else(|| LogicError::new(format!("Job(id={job_id}) cannot be found.")))?;

        if let Some(end) = end {
            if end > now {
                return Err(LogicError::new("End time cannot be set at future time."));
            }
            if end <= start {
                return Err(LogicError::new(
                    "End time must be greater than start time.",
                ));
            }
            if start.date() != end.date() {
                return Err(LogicError::new("Start and end must be same dates."));
            }
        }

        Ok(job)
    }

    /// Register a finished interval. Both timestamps are truncated to the
    /// minute before validation and persistence.
    pub fn register(
        pool: &mut DbPool,
        job_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(), LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let start = truncate_to_minute(start);
        let end = truncate_to_minute(end);
        let job = Self::validate_interval(&tx, job_id, start, Some(end))?;

        let record_id = queries::insert_job_record(&tx, job.id, start, Some(end))?;
        log_operation(
            &tx,
            "record_register",
            &record_id.to_string(),
            "interval registered",
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Replace an existing record's job/start/end wholesale. Validation runs
    /// against the NEW job id.
    pub fn revise(
        pool: &mut DbPool,
        job_record_id: i64,
        job_id: i64,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<(), LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let record = queries::select_one_record_by_id(&tx, job_record_id)?.ok_or_else(|| {
            LogicError::new(format!("JobRecord(id={job_record_id}) cannot be found."))
        })?;

        let start = truncate_to_minute(start);
        let end = truncate_to_minute(end);
        let job = Self::validate_interval(&tx, job_id, start, Some(end))?;

        queries::update_job_record(&tx, record.id, job.id, start, Some(end))?;
        log_operation(
            &tx,
            "record_revise",
            &record.id.to_string(),
            "interval revised",
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Start a timer on a job: inserts an open record with start = now
    /// (minute-truncated). At most one record may be in progress per calendar
    /// date, so an open record on today's date fails the call. Returns the
    /// new record's id.
    pub fn start(pool: &mut DbPool, job_id: i64) -> Result<i64, LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let now = Local::now().naive_local();
        if let Some(in_progress) = queries::select_one_in_progress_record_by_date(&tx, now.date())?
        {
            return Err(LogicError::new(format!(
                "JobRecord(id={}) is already started.",
                in_progress.id
            )));
        }

        let start = truncate_to_minute(now);
        let job = Self::validate_interval(&tx, job_id, start, None)?;

        let record_id = queries::insert_job_record(&tx, job.id, start, None)?;
        log_operation(&tx, "record_start", &record_id.to_string(), "timer started")?;

        tx.commit()?;
        Ok(record_id)
    }

    /// Stop an open record, setting its end to now. The stop time is
    /// minute-truncated like every other write path, except when the record
    /// was started in the same minute: truncation would collapse the
    /// interval to zero, so the seconds are kept to preserve `end > start`.
    pub fn stop(pool: &mut DbPool, job_record_id: i64) -> Result<(), LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let record = queries::select_one_record_by_id(&tx, job_record_id)?.ok_or_else(|| {
            LogicError::new(format!("JobRecord(id={job_record_id}) cannot be found."))
        })?;
        if record.end.is_some() {
            return Err(LogicError::new(format!(
                "JobRecord(id={job_record_id}) is already stopped."
            )));
        }

        let now = Local::now().naive_local();
        let mut end = truncate_to_minute(now);
        if end <= record.start {
            end = now;
        }
        if end <= record.start {
            return Err(LogicError::new(
                "End time must be greater than start time.",
            ));
        }
        queries::update_job_record_end(&tx, &record, Some(end))?;
        log_operation(
            &tx,
            "record_stop",
            &record.id.to_string(),
            "timer stopped",
        )?;

        tx.commit()?;
        Ok(())
    }

    /// Finished records of one day, chronological.
    pub fn acquire_all_finished_by_date(
        pool: &mut DbPool,
        date: NaiveDate,
    ) -> Result<Vec<JobRecordView>, LogicError> {
        let tx = pool.conn.transaction()?;
        let rows = queries::select_all_finished_records_by_date(&tx, date)?;
        tx.commit()?;

        Ok(rows.iter().map(JobRecordView::from).collect())
    }

    /// The day's open record, if any.
    pub fn acquire_one_in_progress_by_date(
        pool: &mut DbPool,
        date: NaiveDate,
    ) -> Result<Option<JobRecordView>, LogicError> {
        let tx = pool.conn.transaction()?;
        let row = queries::select_one_in_progress_record_by_date(&tx, date)?;
        tx.commit()?;

        Ok(row.as_ref().map(JobRecordView::from))
    }
}
