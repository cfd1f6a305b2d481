mod app;
mod cli;
mod color;
mod config;
mod event;
mod gradient;
mod logging;
mod tui;
mod types;
mod ui;

use std::time::Duration;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli_opts = cli::Cli::parse();
    let config = config::load(cli_opts.config.as_deref())?;
    logging::init(&config.log_level)?;
    tracing::info!(?config, "config loaded");

    if let Some(command) = cli_opts.command {
        return cli::run(command);
    }

    let mut app = app::App::new(&config);
    let mut terminal = tui::init()?;
    let result = event::run(
        &mut app,
        &mut terminal,
        Duration::from_millis(config.tick_rate_ms),
    );

    tui::restore()?;

    result
}
