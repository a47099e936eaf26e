use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::JobLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Register or list jobs.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Job {
        add,
        category,
        list,
    } = cmd
    {
        let mut pool = open_store(cfg)?;

        if let Some(name) = add {
            JobLogic::register(&mut pool, name, category.as_deref())?;
            match category {
                Some(c) => success(format!("Job '{name}' registered under '{c}'")),
                None => success(format!("Job '{name}' registered")),
            }
        }

        if *list || add.is_none() {
            let jobs = JobLogic::acquire_all(&mut pool)?;
            if jobs.is_empty() {
                info("No jobs registered yet");
            }
            for job in jobs {
                println!("{job}");
            }
        }
    }

    Ok(())
}
