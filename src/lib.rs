//! rWorktime library root.
//! Exposes the work duration calculator, the CLI parser and the high-level
//! run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use crate::core::clock::{Clock, FixedClock, SystemClock};
use errors::AppResult;
use tracing::debug;

pub use crate::core::calculator::duration::WorkDurationCalculator;
pub use models::clock_time::ClockTime;
pub use models::work_time::{WorkDurationResult, WorkTime};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config, clock: &dyn Clock) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(cli, cfg),
        Commands::Calc { .. } => cli::commands::calc::handle(&cli.command, cfg, clock),
        Commands::Season { .. } => cli::commands::season::handle(&cli.command, cfg, clock),
    }
}

/// Install the stderr diagnostics subscriber (RUST_LOG, default rworktime=warn)
pub fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("rworktime=warn"));

    // a second init (e.g. in tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let config_path = cli.config_path();
    let cfg = Config::load_from(&config_path)?;
    debug!(path = %config_path.display(), "configuration loaded");

    // 3️⃣ pick the clock: frozen by --now, local time otherwise
    let clock: Box<dyn Clock> = match &cli.now {
        Some(now) => Box::new(FixedClock::new(utils::date::parse_datetime(now)?)),
        None => Box::new(SystemClock),
    };

    // 4️⃣ dispatch
    dispatch(&cli, &cfg, clock.as_ref())
}
