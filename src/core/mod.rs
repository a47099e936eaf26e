//! Domain logic: transactional wrappers over the persistence tier.
//!
//! Every public operation runs inside one SQLite transaction (IMMEDIATE for
//! writes, so the write lock is taken up front and a conflicting transaction
//! aborts instead of silently widening isolation). Failures are never
//! retried; they surface as `LogicError` and the transaction rolls back on
//! drop, leaving prior state unchanged.

pub mod category;
pub mod job;
pub mod note;
pub mod record;

pub use category::CategoryLogic;
pub use job::JobLogic;
pub use note::NoteLogic;
pub use record::RecordLogic;
