//! Depth-limited minimax with the open-lines heuristic

use super::{Cutoff, Pruning, Search, Strategy, WinningLines, check_depth};
use crate::{
    Result,
    tictactoe::{Action, Game, Player, State},
};

/// Searches `depth` plies ahead and scores the frontier with [`WinningLines`]
#[derive(Debug)]
pub struct Heuristic<'g, G> {
    search: Search<'g, G, WinningLines>,
    depth: usize,
}

impl<'g, G: Game> Heuristic<'g, G> {
    /// # Errors
    ///
    /// Returns [`crate::Error::MisconfiguredGame`] if `depth` is zero.
    pub fn new(game: &'g G, depth: usize) -> Result<Self> {
        check_depth(depth)?;
        Ok(Heuristic {
            search: Search::new(
                game,
                WinningLines::new(),
                Cutoff::Depth(depth),
                Pruning::Exhaustive,
            ),
            depth,
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn possible_winning_lines(&mut self, state: &State, player: Player) -> i32 {
        let game = self.search.game();
        self.search
            .evaluator_mut()
            .possible_winning_lines(game, state, player)
    }

    pub fn heuristic(&mut self, state: &State, player: Player) -> i32 {
        let game = self.search.game();
        self.search.evaluator_mut().heuristic(game, state, player)
    }

    /// Value of every legal action, in action order
    pub fn action_values(&mut self, state: &State, player: Player) -> Result<Vec<(Action, i32)>> {
        self.search.action_values(state, player)
    }
}

impl<'g, G: Game> Strategy for Heuristic<'g, G> {
    type Game = G;

    fn game(&self) -> &G {
        self.search.game()
    }

    fn name(&self) -> &str {
        "heuristic"
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
