use anyhow::Result;
use clap::Parser;
use log::{info, LevelFilter};

use uttt_bot::protocol::dispatcher::run_stdio_loop;

mod cli;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for protocol replies.
    let mut logger = env_logger::Builder::new();
    logger
        .filter_module("uttt_bot", LevelFilter::Warn)
        .parse_default_env();
    if let Some(level) = cli.log_level {
        logger.filter_module("uttt_bot", level);
    }
    logger.target(env_logger::Target::Stderr).init();

    let engine = cli.build_engine();
    info!("starting with {} engine", engine.name());

    run_stdio_loop(engine)?;
    Ok(())
}
