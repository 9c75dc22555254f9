//! Compare command - Measure how much search each strategy does for one move

use std::time::{Duration, Instant};

use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use crate::{
    cli::output,
    strategy::{AlphaBeta, Heuristic, MinMax, Strategy},
    tictactoe::{Action, Game, Player, State, TicTacToe},
};

#[derive(Parser, Debug)]
#[command(about = "Compare heuristic and alpha-beta search across depths")]
pub struct CompareArgs {
    /// Deepest search depth to compare
    #[arg(long, short = 'd', default_value_t = 4)]
    pub depth: usize,

    /// Board height
    #[arg(long, default_value_t = 3)]
    pub height: usize,

    /// Board width
    #[arg(long, default_value_t = 3)]
    pub width: usize,

    /// Position to search from, one character per cell (default: empty board)
    #[arg(long, short = 's')]
    pub state: Option<String>,

    /// Skip the exhaustive minmax search
    #[arg(long)]
    pub skip_minmax: bool,
}

impl CompareArgs {
    /// The board and the position to search from
    pub fn position(&self) -> Result<(TicTacToe, State)> {
        let game = TicTacToe::new(self.height, self.width)?;
        let state = match &self.state {
            Some(text) => game.parse_state(text)?,
            None => game.initial_state(),
        };
        Ok((game, state))
    }
}

/// One strategy's decision on the compared position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Measurement {
    pub strategy: String,
    pub depth: Option<usize>,
    pub action: Action,
    pub leafs: u64,
    pub elapsed: Duration,
}

fn measure<S: Strategy + ?Sized>(
    strategy: &mut S,
    state: &State,
    player: Player,
    depth: Option<usize>,
) -> Result<Measurement> {
    let start = Instant::now();
    let action = strategy.action(state, player)?;
    Ok(Measurement {
        strategy: strategy.name().to_string(),
        depth,
        action,
        leafs: strategy.leaf_count(),
        elapsed: start.elapsed(),
    })
}

/// Run every compared strategy once from `state`
pub fn run_comparison(
    game: &TicTacToe,
    state: &State,
    max_depth: usize,
    include_minmax: bool,
    mut on_done: impl FnMut(&Measurement),
) -> Result<Vec<Measurement>> {
    if game.terminal_test(state) {
        bail!("position {state} is already decided");
    }
    let player = game.to_move(state);
    let mut results = Vec::new();

    for depth in 1..=max_depth {
        let heuristic = measure(&mut Heuristic::new(game, depth)?, state, player, Some(depth))?;
        on_done(&heuristic);
        let pruned = measure(&mut AlphaBeta::new(game, depth)?, state, player, Some(depth))?;
        on_done(&pruned);

        if heuristic.action != pruned.action {
            bail!(
                "depth {depth}: heuristic chose {} but alphabeta chose {}",
                heuristic.action,
                pruned.action
            );
        }
        info!(
            "depth {depth}: action {}, {} vs {} leaves",
            pruned.action, heuristic.leafs, pruned.leafs
        );
        results.push(heuristic);
        results.push(pruned);
    }

    if include_minmax {
        let exact = measure(&mut MinMax::new(game), state, player, None)?;
        on_done(&exact);
        results.push(exact);
    }
    Ok(results)
}

pub fn execute(args: CompareArgs) -> Result<()> {
    if args.depth == 0 {
        bail!("--depth must be at least 1");
    }
    let (game, state) = args.position()?;

    let total = 2 * args.depth as u64 + u64::from(!args.skip_minmax);
    let pb = output::create_search_progress(total);
    let results = run_comparison(&game, &state, args.depth, !args.skip_minmax, |done| {
        pb.set_message(done.strategy.clone());
        pb.inc(1);
    })?;
    pb.finish_and_clear();

    output::print_section(&format!("Search from {state} ({} to move)", game.to_move(&state)));
    println!(
        "  {:<12} {:>6} {:>7} {:>12} {:>10}",
        "strategy", "depth", "action", "leaves", "ms"
    );
    for m in &results {
        let depth = m.depth.map_or_else(|| "-".to_string(), |d| d.to_string());
        println!(
            "  {:<12} {:>6} {:>7} {:>12} {:>10}",
            m.strategy,
            depth,
            m.action,
            output::format_number(m.leafs),
            m.elapsed.as_millis()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comparison_pairs_per_depth() {
        let game = TicTacToe::standard();
        let state = game.initial_state();
        let mut seen = 0;
        let results = run_comparison(&game, &state, 3, false, |_| seen += 1).unwrap();

        assert_eq!(results.len(), 6);
        assert_eq!(seen, 6);
        for pair in results.chunks(2) {
            assert_eq!(pair[0].strategy, "heuristic");
            assert_eq!(pair[1].strategy, "alphabeta");
            assert_eq!(pair[0].action, pair[1].action);
            assert!(pair[1].leafs <= pair[0].leafs);
        }
    }

    #[test]
    fn test_minmax_included_from_midgame() {
        let game = TicTacToe::standard();
        let state = game.parse_state("X..OO...X").unwrap();
        let results = run_comparison(&game, &state, 1, true, |_| {}).unwrap();

        let exact = results.last().unwrap();
        assert_eq!(exact.strategy, "minmax");
        assert_eq!(exact.depth, None);
        assert_eq!(exact.action, 5);
    }

    #[test]
    fn test_larger_board_from_flags() {
        let args = CompareArgs::try_parse_from([
            "compare",
            "--height",
            "4",
            "--width",
            "4",
            "--state",
            "X...O...........",
            "--depth",
            "2",
        ])
        .unwrap();
        let (game, state) = args.position().unwrap();
        assert_eq!(game.cell_count(), 16);

        let results = run_comparison(&game, &state, args.depth, false, |_| {}).unwrap();
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|m| state.get(m.action) == Some(Player::Empty)));
    }

    #[test]
    fn test_state_must_fit_board() {
        let args = CompareArgs::try_parse_from(["compare", "--state", "X...O..........."]).unwrap();
        assert!(args.position().is_err());
    }

    #[test]
    fn test_decided_position_rejected() {
        let game = TicTacToe::standard();
        let state = game.parse_state("XXXOO....").unwrap();
        assert!(run_comparison(&game, &state, 2, true, |_| {}).is_err());
    }
}
