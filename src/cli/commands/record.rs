use crate::cli::commands::{open_store, parse_datetime_arg};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Register a finished interval or revise an existing record.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Add { job_id, start, end } => {
            let start = parse_datetime_arg(start)?;
            let end = parse_datetime_arg(end)?;

            let mut pool = open_store(cfg)?;
            RecordLogic::register(&mut pool, *job_id, start, end)?;
            success(format!("Interval registered on job #{job_id}"));
        }
        Commands::Revise {
            record_id,
            job_id,
            start,
            end,
        } => {
            let start = parse_datetime_arg(start)?;
            let end = parse_datetime_arg(end)?;

            let mut pool = open_store(cfg)?;
            RecordLogic::revise(&mut pool, *record_id, *job_id, start, end)?;
            success(format!("Record #{record_id} revised"));
        }
        _ => {}
    }

    Ok(())
}
