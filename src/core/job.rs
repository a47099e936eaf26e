use crate::db::log::log_operation;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::LogicError;
use crate::models::JobView;
use rusqlite::TransactionBehavior;

/// High-level business logic for jobs.
pub struct JobLogic;

impl JobLogic {
    /// Register a job, optionally under a category. A named category must
    /// already exist; duplicates of the (name, category) pair fail, including
    /// the no-category case the store's own constraint cannot catch.
    pub fn register(
        pool: &mut DbPool,
        name: &str,
        category_name: Option<&str>,
    ) -> Result<(), LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        match category_name {
            None => queries::insert_job(&tx, name, None)?,
            Some(category_name) => {
                let category = queries::select_one_category_by_name(&tx, category_name)?
                    .ok_or_else(|| LogicError::new("Category is specified, but not found."))?;
                queries::insert_job(&tx, name, Some(&category.name))?;
            }
        }
        log_operation(&tx, "job_register", name, "job registered")?;

        tx.commit()?;
        Ok(())
    }

    /// All jobs as projections with the category snapshot nested inside,
    /// ordered by (category name, job name), uncategorized first.
    pub fn acquire_all(pool: &mut DbPool) -> Result<Vec<JobView>, LogicError> {
        let tx = pool.conn.transaction()?;
        let rows = queries::select_all_jobs(&tx)?;
        tx.commit()?;

        Ok(rows.iter().map(JobView::from).collect())
    }
}
