//! Command-line interface for tictacgoe.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Tic-Tac-Goe - N x N tic-tac-toe in the terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictacgoe")]
#[command(about = "Two-player N x N tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Size of the grid (n x n). Defaults to 3.
    #[arg(short, long, allow_negative_numbers = true)]
    pub size: Option<i64>,

    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// File that receives log output (the terminal is busy drawing the board)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
