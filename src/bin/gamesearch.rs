//! gamesearch CLI - play and compare adversarial search strategies
//!
//! - `play`: run one match between two strategies, rendering every ply
//! - `compare`: measure heuristic and alpha-beta search across depths
//!
//! Set `RUST_LOG=debug` to trace the search decisions.

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "gamesearch")]
#[command(version, about = "Game-tree search strategies for tic-tac-toe", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match between two strategies
    Play(gamesearch::cli::commands::play::PlayArgs),

    /// Compare heuristic and alpha-beta search across depths
    Compare(gamesearch::cli::commands::compare::CompareArgs),
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => gamesearch::cli::commands::play::execute(args),
        Commands::Compare(args) => gamesearch::cli::commands::compare::execute(args),
    }
}
