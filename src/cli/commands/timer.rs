use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::RecordLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Start or stop the day's timer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Start { job_id } => {
            let mut pool = open_store(cfg)?;
            let record_id = RecordLogic::start(&mut pool, *job_id)?;
            success(format!("Started record #{record_id} on job #{job_id}"));
        }
        Commands::Stop { record_id } => {
            let mut pool = open_store(cfg)?;
            RecordLogic::stop(&mut pool, *record_id)?;
            success(format!("Stopped record #{record_id}"));
        }
        _ => {}
    }

    Ok(())
}
