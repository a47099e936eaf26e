//! worklogger library root.
//! Exposes the CLI parser, the high-level run() function, and the internal
//! modules (persistence, domain logic, view projections).

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher.
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Category { .. } => cli::commands::category::handle(&cli.command, cfg),
        Commands::Job { .. } => cli::commands::job::handle(&cli.command, cfg),
        Commands::Add { .. } | Commands::Revise { .. } => {
            cli::commands::record::handle(&cli.command, cfg)
        }
        Commands::Start { .. } | Commands::Stop { .. } => {
            cli::commands::timer::handle(&cli.command, cfg)
        }
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::Note { .. } => cli::commands::note::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs: parse the CLI, load the configuration once,
/// apply the --db override, and dispatch.
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
