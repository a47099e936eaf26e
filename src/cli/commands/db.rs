use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::migrate::{pending_migrations, run_pending_migrations};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};

/// Database maintenance: integrity check, pending migrations, audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        log,
    } = cmd
    {
        let pool = open_store(cfg)?;

        if *migrate {
            let pending = pending_migrations(&pool.conn)?;
            run_pending_migrations(&pool.conn)?;
            success(format!("Applied {pending} pending migration(s)"));
        }

        if *check {
            let result: String =
                pool.conn
                    .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
            if result == "ok" {
                success("Database integrity: ok");
            } else {
                return Err(AppError::Other(format!(
                    "integrity check failed: {result}"
                )));
            }
        }

        if *log {
            let rows = load_log(&pool.conn)?;
            if rows.is_empty() {
                info("Audit log is empty");
            }
            for (date, operation, message) in rows {
                println!("{date} {operation}: {message}");
            }
        }

        if !*migrate && !*check && !*log {
            info("Nothing to do: pass --check, --migrate or --log");
        }
    }

    Ok(())
}
