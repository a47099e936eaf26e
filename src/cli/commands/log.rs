use crate::cli::commands::{open_store, parse_date_or_today};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{NoteLogic, RecordLogic};
use crate::errors::{AppError, AppResult};
use crate::models::{JobRecordView, NoteView};
use crate::ui::messages::{header, info};
use chrono::NaiveDate;
use serde::Serialize;

/// One day's worth of data, as rendered by `log`.
#[derive(Serialize)]
struct DayReport {
    date: NaiveDate,
    records: Vec<JobRecordView>,
    in_progress: Option<JobRecordView>,
    note: Option<NoteView>,
}

/// Show the day report: finished records in chronological order, the open
/// record if any, and the daily note.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { date, json } = cmd {
        let date = parse_date_or_today(date.as_deref())?;

        let mut pool = open_store(cfg)?;
        let report = DayReport {
            date,
            records: RecordLogic::acquire_all_finished_by_date(&mut pool, date)?,
            in_progress: RecordLogic::acquire_one_in_progress_by_date(&mut pool, date)?,
            note: NoteLogic::acquire_one_by_date(&mut pool, date)?,
        };

        if *json {
            let out = serde_json::to_string_pretty(&report)
                .map_err(|e| AppError::Export(e.to_string()))?;
            println!("{out}");
            return Ok(());
        }

        header(report.date);
        if report.records.is_empty() && report.in_progress.is_none() {
            info("No records for this date");
        }
        for record in &report.records {
            println!("{record}");
        }
        if let Some(open) = &report.in_progress {
            println!("{open}");
        }
        if let Some(note) = &report.note {
            if let Some(content) = &note.content {
                println!("note: {content}");
            }
        }
    }

    Ok(())
}
