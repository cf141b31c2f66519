//! Strictly Minimax - command-line front end.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_minimax::{EngineConfig, commands, initial_state};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = EngineConfig::load(cli.config.as_deref())?;
    if cli.parallel {
        config = config.with_parallel(true);
    }

    // Logs go to stderr so --json output stays parseable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = match cli.command {
        Command::Best { board } => commands::best(&config, board),
        Command::Analyze { board } => commands::analyze(&config, board),
        Command::Apply { board, mv } => commands::apply(board, mv)?,
        Command::SelfPlay { from } => {
            commands::self_play(&config, from.unwrap_or_else(initial_state))?
        }
    };

    if cli.json {
        println!("{}", report.to_json().context("Failed to serialize report")?);
    } else {
        print!("{}", report.text(*config.show_nodes()));
    }
    Ok(())
}
