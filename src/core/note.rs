use crate::db::log::log_operation;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::LogicError;
use crate::models::NoteView;
use chrono::NaiveDate;
use rusqlite::TransactionBehavior;

/// High-level business logic for daily notes.
pub struct NoteLogic;

impl NoteLogic {
    /// Save the note for a date: insert when absent, overwrite otherwise.
    pub fn save(pool: &mut DbPool, date: NaiveDate, content: &str) -> Result<(), LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        queries::upsert_note(&tx, date, content)?;
        log_operation(&tx, "note_save", &date.to_string(), "note saved")?;

        tx.commit()?;
        Ok(())
    }

    pub fn acquire_one_by_date(
        pool: &mut DbPool,
        date: NaiveDate,
    ) -> Result<Option<NoteView>, LogicError> {
        let tx = pool.conn.transaction()?;
        let row = queries::select_one_note_by_date(&tx, date)?;
        tx.commit()?;

        Ok(row.as_ref().map(NoteView::from))
    }
}
