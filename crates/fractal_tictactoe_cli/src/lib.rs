//! Terminal driver for the fractal tic-tac-toe engine.
//!
//! # Architecture
//!
//! - **Cli**: command-line flags
//! - **Config**: TOML file values merged with flags
//! - **Session**: the line-oriented play loop over any reader/writer
//! - **Render**: grid text and status reports

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

pub use cli::Cli;
pub use config::{DEFAULT_LOG_FILTER, FractalConfig};
pub use render::{StatusReport, describe_forced, describe_grid, render_grid};
pub use session::{Command, Session};
