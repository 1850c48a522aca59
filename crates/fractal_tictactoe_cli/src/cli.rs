//! Command-line interface for the fractal driver.

use clap::Parser;
use std::path::PathBuf;

/// Fractal tic-tac-toe - play tic-tac-toe nested to any depth
#[derive(Parser, Debug)]
#[command(name = "fractal")]
#[command(about = "Play nested tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of nested levels (1 = normal tic-tac-toe)
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Path to a TOML config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print status reports as JSON
    #[arg(long)]
    pub json: bool,

    /// Log filter directive (overrides RUST_LOG and the config file)
    #[arg(long)]
    pub log: Option<String>,
}
