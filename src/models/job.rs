use crate::db::models::JobRow;
use crate::models::CategoryView;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JobView {
    pub id: i64,
    pub name: String,
    pub category: Option<CategoryView>, // snapshotted, not a live reference
}

impl From<&JobRow> for JobView {
    fn from(row: &JobRow) -> Self {
        Self {
            id: row.id,
            name: row.name.clone(),
            category: row.category.as_ref().map(|name| CategoryView {
                name: name.clone(),
            }),
        }
    }
}

impl fmt::Display for JobView {
    /// `#<id> <category>/<name>`, or `#<id> <name>` for uncategorized jobs.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.category {
            Some(category) => write!(f, "#{} {}/{}", self.id, category, self.name),
            None => write!(f, "#{} {}", self.id, self.name),
        }
    }
}
