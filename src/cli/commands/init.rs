use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Initialize configuration and database files, then create the schema.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    if !cli.test {
        success(format!("Config file: {:?}", Config::config_file()));
    }
    success(format!("Database:    {}", cfg.database));

    Ok(())
}
