use std::path::PathBuf;

use birthday_calendar::MonthDay;
use clap::{Parser, Subcommand};

/// Staff birthday calendar.
#[derive(Parser)]
#[command(
    name = "birthday-calendar",
    version,
    about = "Browse staff birthdays day by day"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file [default: birthday.toml, if present].
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Load staff from this JSON fixture instead of the API.
    #[arg(long, global = true, conflicts_with = "api_base_url")]
    pub fixture: Option<PathBuf>,

    /// Fetch staff from the API at this base URL.
    #[arg(long, global = true)]
    pub api_base_url: Option<String>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show who has a birthday on a day (default: today).
    Show {
        /// Day as M/D.
        #[arg(short, long, conflicts_with = "index")]
        date:  Option<MonthDay>,
        /// Day as a slot index 0..=365.
        #[arg(short, long)]
        index: Option<u16>,
    },
    /// Move to the next day with a birthday.
    Next {
        /// Start from this day (M/D) instead of today.
        #[arg(short, long)]
        from: Option<MonthDay>,
    },
    /// Move to the previous day with a birthday.
    Prev {
        /// Start from this day (M/D) instead of today.
        #[arg(short, long)]
        from: Option<MonthDay>,
    },
    /// List every day with a birthday, one month per line.
    Calendar {
        /// Day to highlight (M/D) instead of today.
        #[arg(short, long)]
        date: Option<MonthDay>,
        /// List all 366 days, marking birthdays with `*`.
        #[arg(short, long)]
        all:  bool,
    },
}
