use crate::db::models::JobRecordRow;
use crate::models::JobView;
use crate::utils::time::TIME_DISPLAY_FORMAT;
use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobRecordView {
    pub id: i64,
    pub job: JobView,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
}

impl JobRecordView {
    pub fn is_in_progress(&self) -> bool {
        self.end.is_none()
    }
}

impl From<&JobRecordRow> for JobRecordView {
    fn from(row: &JobRecordRow) -> Self {
        Self {
            id: row.id,
            job: JobView::from(&row.job),
            start: row.start,
            end: row.end,
        }
    }
}

impl fmt::Display for JobRecordView {
    /// `HH:MM - HH:MM (<job>)`; an open record renders the end as `??:??`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.format(TIME_DISPLAY_FORMAT);
        match self.end {
            Some(end) => write!(
                f,
                "{} - {} ({})",
                start,
                end.format(TIME_DISPLAY_FORMAT),
                self.job
            ),
            None => write!(f, "{} - ??:?? ({})", start, self.job),
        }
    }
}
