//! Exhaustive minimax to terminal states

use super::{Cutoff, Pruning, Search, Strategy, TerminalUtility};
use crate::{
    Result,
    tictactoe::{Action, Game, Player, State},
};

/// Plays perfectly by searching the whole remaining game tree.
///
/// Only practical for small boards; the full 3x3 tree has about half a
/// million leaves from the empty position.
#[derive(Debug)]
pub struct MinMax<'g, G> {
    search: Search<'g, G, TerminalUtility>,
}

impl<'g, G: Game> MinMax<'g, G> {
    pub fn new(game: &'g G) -> Self {
        MinMax {
            search: Search::new(game, TerminalUtility, Cutoff::Terminal, Pruning::Exhaustive),
        }
    }

    /// Exact minimax value of `state` with `player` to move
    pub fn value(&mut self, state: &State, player: Player) -> Result<i32> {
        self.search.value(state, player)
    }
}

impl<'g, G: Game> Strategy for MinMax<'g, G> {
    type Game = G;

    fn game(&self) -> &G {
        self.search.game()
    }

    fn name(&self) -> &str {
        "minmax"
    }

    fn action(&mut self, state: &State, player: Player) -> Result<Action> {
        self.search.best_action(state, player).map(|(action, _)| action)
    }

    fn evaluation(&mut self, state: &State, player: Player) -> i32 {
        self.search.evaluation(state, player)
    }

    fn leaf_count(&self) -> u64 {
        self.search.leaf_count()
    }
}
