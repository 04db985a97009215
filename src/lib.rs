//! vendcal library root.
//! Exposes the CLI parser, the high-level run() function, the calendar
//! engine and the snapshot data layer.

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::{AppError, AppResult};
use utils::path::absolutize;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Machines { .. } => cli::commands::machines::handle(&cli.command, cfg),
        Commands::Maintenance { .. } => cli::commands::maintenance::handle(&cli.command, cfg),
        Commands::Calendar { .. } => cli::commands::calendar::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Schedule => cli::commands::schedule::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
    }
}

/// Diagnostics go to stderr; `VENDCAL_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) -> AppResult<()> {
    let level = if verbose { "debug" } else { "warn" };

    let filter = tracing_subscriber::EnvFilter::try_from_env("VENDCAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::Config(format!("failed to initialize logging: {e}")))
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    // 2️⃣ init does not need an existing configuration
    if let Commands::Init { .. } = cli.command {
        return cli::commands::init::handle(&cli);
    }

    // 3️⃣ load config once, then apply command line overrides
    let mut cfg = Config::load()?;

    if let Some(p) = &cli.machines {
        cfg.machines_file = Some(absolutize(p));
    }
    if let Some(p) = &cli.maintenance {
        cfg.maintenance_file = Some(absolutize(p));
    }
    if let Some(p) = &cli.users {
        cfg.users_file = Some(absolutize(p));
    }
    if cli.no_color {
        cfg.color = false;
    }

    dispatch(&cli, &cfg)
}
