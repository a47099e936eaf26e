//! View projections: immutable, store-independent snapshots of the persisted
//! entities, safe to hold after the originating transaction has closed.

pub mod category;
pub mod job;
pub mod note;
pub mod record;

pub use category::CategoryView;
pub use job::JobView;
pub use note::NoteView;
pub use record::JobRecordView;
