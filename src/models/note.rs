use crate::db::models::NoteRow;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub date: NaiveDate,
    pub content: Option<String>,
}

impl From<&NoteRow> for NoteView {
    fn from(row: &NoteRow) -> Self {
        Self {
            date: row.date,
            content: row.content.clone(),
        }
    }
}
