//! Depth-limited heuristic search with alpha-beta pruning

use super::{Cutoff, Pruning, Search, Strategy, WinningLines, check_depth};
use crate::{
    Result,
    tictactoe::{Action, Game, Player, State},
};

/// Same objective and evaluator as [`super::Heuristic`], but skips siblings
/// that cannot change a node's value.
///
/// Picks the same action as `Heuristic` at equal depth while evaluating at
/// most as many leaves. Action order affects how much is pruned, never the
/// result.
#[derive(Debug)]
pub struct AlphaBeta<'g, G> {
    search: Search<'g, G, WinningLines>,
    depth: usize,
}

impl<'g, G: Game> AlphaBeta<'g, G> {
    /// # Errors
    ///
    /// Returns [`crate::Error::MisconfiguredGame`] if `depth` is zero.
    pub fn new(game: &'g G, depth: usize) -> Result<Self> {
        check_depth(depth)?;
        Ok(AlphaBeta {
            search: Search::new(
                game,
                WinningLines::new(),
                Cutoff::Depth(depth),
                Pruning::AlphaBeta,
            ),
            depth,
        })
    }

    pub fn depth(&self) -> usize {
        self.depth
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

impl<'g, G: Game> Strategy for AlphaBeta<'g, G> {
    type Game = G;

    fn game(&self) -> &G {
        self.search.game()
    }

    fn name(&self) -> &str {
        "alphabeta"
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, strategy::Heuristic, tictactoe::TicTacToe};

    #[test]
    fn test_zero_depth_rejected() {
        let game = TicTacToe::standard();
        assert!(matches!(
            AlphaBeta::new(&game, 0),
            Err(Error::MisconfiguredGame { .. })
        ));
    }

    #[test]
    fn test_root_values_match_heuristic() {
        let game = TicTacToe::standard();
        let state = game.parse_state("X...O....").unwrap();
        let mut heuristic = Heuristic::new(&game, 3).unwrap();
        let mut pruned = AlphaBeta::new(&game, 3).unwrap();

        assert_eq!(
            heuristic.action_values(&state, Player::X).unwrap(),
            pruned.action_values(&state, Player::X).unwrap()
        );
        assert!(pruned.leaf_count() <= heuristic.leaf_count());
    }

    #[test]
    fn test_prunes_from_empty_board() {
        let game = TicTacToe::standard();
        let state = game.initial_state();
        let mut heuristic = Heuristic::new(&game, 4).unwrap();
        let mut pruned = AlphaBeta::new(&game, 4).unwrap();

        assert_eq!(
            heuristic.action(&state, Player::X).unwrap(),
            pruned.action(&state, Player::X).unwrap()
        );
        assert!(pruned.leaf_count() < heuristic.leaf_count());
    }
}
