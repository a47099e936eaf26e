use crate::db::log::log_operation;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::LogicError;
use crate::models::CategoryView;
use rusqlite::TransactionBehavior;

/// High-level business logic for categories.
pub struct CategoryLogic;

impl CategoryLogic {
    /// Register a category. Registering a name that already exists fails,
    /// whether the duplicate lives in this transaction or was committed
    /// earlier.
    pub fn register(pool: &mut DbPool, name: &str) -> Result<(), LogicError> {
        let tx = pool
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        queries::insert_category(&tx, name)?;
        log_operation(&tx, "category_register", name, "category registered")?;

        tx.commit()?;
        Ok(())
    }

    /// All categories as projections, ordered by name.
    pub fn acquire_all(pool: &mut DbPool) -> Result<Vec<CategoryView>, LogicError> {
        let tx = pool.conn.transaction()?;
        let rows = queries::select_all_categories(&tx)?;
        tx.commit()?;

        Ok(rows.iter().map(CategoryView::from).collect())
    }
}
