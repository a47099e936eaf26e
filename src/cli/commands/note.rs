use crate::cli::commands::{open_store, parse_date_or_today};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::NoteLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Show or save the daily note.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Note { date, set } = cmd {
        let date = parse_date_or_today(date.as_deref())?;
        let mut pool = open_store(cfg)?;

        match set {
            Some(content) => {
                NoteLogic::save(&mut pool, date, content)?;
                success(format!("Note saved for {date}"));
            }
            None => match NoteLogic::acquire_one_by_date(&mut pool, date)? {
                Some(note) => println!("{}", note.content.unwrap_or_default()),
                None => info(format!("No note for {date}")),
            },
        }
    }

    Ok(())
}
