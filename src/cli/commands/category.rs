use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::CategoryLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Register or list categories.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Category { add, list } = cmd {
        let mut pool = open_store(cfg)?;

        if let Some(name) = add {
            CategoryLogic::register(&mut pool, name)?;
            success(format!("Category '{name}' registered"));
        }

        if *list || add.is_none() {
            let categories = CategoryLogic::acquire_all(&mut pool)?;
            if categories.is_empty() {
                info("No categories registered yet");
            }
            for category in categories {
                println!("{category}");
            }
        }
    }

    Ok(())
}
