use crate::config::Config;
use crate::utils::path::expand_tilde;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for rWorktime
/// CLI application to compute worked time net of the seasonal lunch break
#[derive(Parser)]
#[command(
    name = "rworktime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Compute effective working time between two clock times, net of the seasonal lunch break",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Freeze "now" (YYYY-MM-DD HH:MM or YYYY-MM-DD); defaults to the local clock
    #[arg(global = true, long = "now", value_name = "DATETIME")]
    pub now: Option<String>,

    /// Run in test mode (no config file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Config file in use: `--config` if given, the platform default otherwise
    pub fn config_path(&self) -> PathBuf {
        match &self.config {
            Some(p) => expand_tilde(p),
            None => Config::config_file(),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the configuration file with default values
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Compute worked time between two clock times
    ///
    /// Values out of range roll over (25:00 is 01:00 of the next day); pass
    /// negative ones after `--`.
    ///
    /// Examples:
    ///   rworktime calc 09:00 18:00
    ///   rworktime calc 22:00 07:30 --crossing
    ///   rworktime calc 9:00 13:30 --json
    Calc {
        /// Start time (H:MM or HH:MM)
        start: String,

        /// End time (H:MM or HH:MM)
        end: String,

        /// Start belongs to yesterday, end to today (overnight shift)
        #[arg(long, short = 'x')]
        crossing: bool,

        /// Print the result as JSON (overrides the configured output)
        #[arg(long)]
        json: bool,

        /// Also print the clipped interval, lunch windows and deducted breaks
        #[arg(long, short = 'd')]
        details: bool,
    },

    /// Show the season and lunch window of a date, or of every month of a year
    Season {
        /// Date (YYYY-MM-DD); defaults to today
        #[arg(long, conflicts_with = "year")]
        date: Option<String>,

        /// Print a month-by-month table for the given year
        #[arg(long)]
        year: Option<i32>,
    },
}
