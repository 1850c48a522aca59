//! Fractal - play nested tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use fractal_tictactoe_cli::{Cli, FractalConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = FractalConfig::resolve(&cli)?;

    let filter = match &cli.log {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.log_filter)),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(?config, "Starting fractal");

    let stdin = std::io::stdin();
    let mut session = Session::new(config, stdin.lock(), std::io::stdout())?;
    let outcome = session.run()?;
    info!(%outcome, "Session finished");
    Ok(())
}
