//! Play command - Pit two strategies against each other on one board

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    cli::{HumanStrategy, output},
    config::{MatchConfig, StrategyConfig, StrategyKind},
    play::{GameOutcome, Match},
    strategy::Strategy,
    tictactoe::{Game, Player, TicTacToe},
};

#[derive(Parser, Debug)]
#[command(about = "Play one match between two strategies")]
pub struct PlayArgs {
    /// Strategy for X, who moves first (minmax, heuristic, alphabeta, random, human)
    #[arg(long)]
    pub x: Option<StrategyKind>,

    /// Strategy for O
    #[arg(long)]
    pub o: Option<StrategyKind>,

    /// Search depth for depth-limited strategies
    #[arg(long, short = 'd')]
    pub depth: Option<usize>,

    /// Board height
    #[arg(long)]
    pub height: Option<usize>,

    /// Board width
    #[arg(long)]
    pub width: Option<usize>,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON match configuration; command-line flags override it
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Only print the final result
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl PlayArgs {
    /// Resolve the match configuration from the config file and flags
    pub fn match_config(&self) -> Result<MatchConfig> {
        let mut config = match &self.config {
            Some(path) => MatchConfig::load(path)?,
            None => MatchConfig::default(),
        };

        if let Some(kind) = self.x {
            config.x.kind = kind;
        }
        if let Some(kind) = self.o {
            config.o.kind = kind;
        }
        if let Some(depth) = self.depth {
            config.x.depth = depth;
            config.o.depth = depth;
        }
        if let Some(height) = self.height {
            config.game.height = height;
        }
        if let Some(width) = self.width {
            config.game.width = width;
        }
        if let Some(seed) = self.seed {
            config.x.seed = Some(seed);
            config.o.seed = Some(seed.wrapping_add(1));
        }

        config.validate()?;
        Ok(config)
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.match_config()?;
    let game = config.game.build()?;
    let mut x = build_strategy(&config.x, &game)?;
    let mut o = build_strategy(&config.o, &game)?;

    if !args.quiet {
        output::print_section(&format!("{} (X) vs {} (O)", x.name(), o.name()));
        println!("{}", game.render(&game.initial_state()));
    }

    let mut runner = Match::new(&game);
    if !args.quiet {
        runner = runner.with_observer(|state, ply| {
            println!("\n{} plays {}", ply.player, ply.position);
            println!("{}", game.render(state));
        });
    }
    let report = runner.play(&mut x, &mut o)?;

    println!();
    match report.outcome {
        GameOutcome::Win(winner) => println!("{winner} wins"),
        GameOutcome::Draw => println!("Draw"),
    }
    for (kind, seat) in [(config.x.kind, Player::X), (config.o.kind, Player::O)] {
        if kind == StrategyKind::Human {
            println!("{} ({seat})", report.outcome.describe_for(seat));
        }
    }

    if !args.quiet {
        output::print_kv("Plies", &report.moves.len().to_string());
        output::print_kv("X leaves", &output::format_number(report.leafs.0));
        output::print_kv("O leaves", &output::format_number(report.leafs.1));
        output::print_kv("Elapsed", &format!("{} ms", report.elapsed.as_millis()));
    }

    Ok(())
}

/// Build a seat's strategy, attaching the console for human players
fn build_strategy<'g>(
    config: &StrategyConfig,
    game: &'g TicTacToe,
) -> Result<Box<dyn Strategy<Game = TicTacToe> + 'g>> {
    if config.kind == StrategyKind::Human {
        return Ok(Box::new(HumanStrategy::console(game)));
    }
    Ok(config.build(game)?)
}
