//! Command-line configuration for the bot binary.

use clap::{Parser, ValueEnum};
use log::LevelFilter;

use uttt_bot::engines::engine_first_available::FirstAvailableEngine;
use uttt_bot::engines::engine_random::RandomEngine;
use uttt_bot::engines::engine_trait::Engine;

/// Ultimate Tic-Tac-Toe bot speaking the line protocol on stdin/stdout
#[derive(Parser, Debug)]
#[command(name = "uttt_bot")]
#[command(version)]
pub struct Cli {
    /// Decision engine used to answer move requests
    #[arg(long, value_enum, default_value_t = EngineKind::Random)]
    pub engine: EngineKind,

    /// Seed for the random engine; omit for a fresh seed every run
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level for diagnostics on stderr (overrides RUST_LOG)
    #[arg(long)]
    pub log_level: Option<LevelFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EngineKind {
    Random,
    FirstAvailable,
}

impl Cli {
    pub fn build_engine(&self) -> Box<dyn Engine> {
        match (self.engine, self.seed) {
            (EngineKind::Random, Some(seed)) => Box::new(RandomEngine::with_seed(seed)),
            (EngineKind::Random, None) => Box::new(RandomEngine::new()),
            (EngineKind::FirstAvailable, _) => Box::new(FirstAvailableEngine::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;

    use super::{Cli, EngineKind};

    #[test]
    fn defaults_to_random_engine() {
        let cli = Cli::try_parse_from(["uttt_bot"]).expect("no arguments should parse");
        assert_eq!(cli.engine, EngineKind::Random);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.log_level, None);
        assert_eq!(cli.build_engine().name(), "random");
    }

    #[test]
    fn parses_engine_seed_and_log_level() {
        let cli = Cli::try_parse_from([
            "uttt_bot",
            "--engine",
            "first-available",
            "--seed",
            "9",
            "--log-level",
            "debug",
        ])
        .expect("arguments should parse");

        assert_eq!(cli.engine, EngineKind::FirstAvailable);
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.log_level, Some(LevelFilter::Debug));
        assert_eq!(cli.build_engine().name(), "first-available");
    }

    #[test]
    fn rejects_unknown_engine() {
        assert!(Cli::try_parse_from(["uttt_bot", "--engine", "minimax"]).is_err());
    }
}
