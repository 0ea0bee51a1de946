//! `resalloc` command line entry point.
//!
//! # Responsibility
//! - Parse arguments, initialize logging and open the configured store.
//! - Dispatch to one command handler and map its outcome to an exit code.

mod args;
mod commands;
mod demo;
mod render;

use anyhow::{Context, Result};
use args::{Cli, Commands};
use clap::Parser;
use log::info;
use resalloc_core::{
    core_version, default_log_dir, default_log_level, init_logging, open_store, StoreConfig,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = cli.log_level.unwrap_or_else(default_log_level);
    let log_dir = cli.log_dir.clone().unwrap_or_else(default_log_dir);
    if let Err(err) = init_logging(level.as_str(), &log_dir) {
        render::notice(&format!("logging disabled: {err}"));
    }

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            render::fatal(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = StoreConfig::from_optional_path(cli.db.as_deref());
    info!(
        "event=cli_start module=cli status=ok version={} store_mode={}",
        core_version(),
        config.mode()
    );
    if !config.is_persistent() && !matches!(cli.command, Commands::Demo) {
        render::notice("using an in-memory store; pass --db to keep changes");
    }

    let conn = open_store(&config).context("failed to open store")?;

    match cli.command {
        Commands::Seed => commands::seed(&conn),
        Commands::Assign {
            employee_id,
            project_id,
        } => commands::assign(&conn, employee_id, project_id),
        Commands::Deactivate { employee_id } => commands::deactivate(&conn, employee_id),
        Commands::Delete { employee_id } => commands::delete(&conn, employee_id),
        Commands::Exists { employee_id } => commands::exists(&conn, employee_id),
        Commands::List { json } => commands::list(&conn, json),
        Commands::Employees { json } => commands::employees(&conn, json),
        Commands::Projects { json } => commands::projects(&conn, json),
        Commands::Demo => demo::run(&conn).map(|()| true),
    }
}
