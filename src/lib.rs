//! punchclock library root.
//! Exposes the punch calculators, the CLI parser, the high-level run()
//! function and the storage modules.

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
use utils::path::resolve_in;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli, cfg),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Status => cli::commands::status::handle(cli, cfg),
        Commands::Punch { .. } => cli::commands::punch::handle(cli, cfg),
        Commands::Hours { .. } => cli::commands::hours::handle(cli, cfg),
        Commands::Del { .. } => cli::commands::del::handle(cli, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::HashPassword { .. } => cli::commands::hash_password::handle(&cli.command),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // config is loaded once; CLI overrides are applied on top
    let mut cfg = Config::load()?;
    let cwd = std::env::current_dir()?;
    if let Some(dir) = &cli.data_dir {
        cfg.data_dir = resolve_in(&cwd, dir).to_string_lossy().to_string();
    }
    if let Some(users) = &cli.users {
        cfg.users_file = resolve_in(&cwd, users).to_string_lossy().to_string();
    }

    utils::logging::init_tracing(&cfg.log_level);
    tracing::debug!(data_dir = %cfg.data_dir, users_file = %cfg.users_file, "configuration resolved");

    dispatch(&cli, &cfg)
}
