mod cli;
mod commands;
mod config;
mod logging;

use std::process;

use anyhow::{Context, Result};
use birthday_calendar::CalendarView;
use chrono::Utc;
use clap::Parser;

use crate::cli::Cli;
use crate::config::AppConfig;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(output) => print!("{output}"),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        },
    }
}

fn run(cli: Cli) -> Result<String> {
    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.apply_env(|key| std::env::var(key).ok());
    config.apply_cli(cli.fixture, cli.api_base_url);
    let source = config.source()?;

    let today = Utc::now().date_naive();
    let mut view = CalendarView::starting_at(&today);

    let table = source
        .load()
        .with_context(|| format!("failed to load staff from {}", source.location()))?;
    view.replace_table(table);

    commands::execute(&cli.command, &mut view)
}
