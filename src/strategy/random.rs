//! Uniformly random baseline

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use super::Strategy;
use crate::{
    Error, Result,
    tictactoe::{Action, Game, Player, State},
};

/// Picks a legal action uniformly at random; evaluates no positions
#[derive(Debug)]
pub struct RandomStrategy<'g, G> {
    game: &'g G,
    rng: StdRng,
}

impl<'g, G: Game> RandomStrategy<'g, G> {
    pub fn new(game: &'g G) -> Self {
        Self::with_seed(game, random())
    }

    /// Create a random strategy with a deterministic seed
    pub fn with_seed(game: &'g G, seed: u64) -> Self {
        RandomStrategy {
            game,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl<'g, G: Game> Strategy for RandomStrategy<'g, G> {
    type Game = G;

    fn game(&self) -> &G {
        self.game
    }

    fn name(&self) -> &str {
        "random"
    }

    fn action(&mut self, state: &State, _player: Player) -> Result<Action> {
        self.game.check_state(state)?;
        let actions = self.game.actions(state);
        if actions.is_empty() {
            return Err(Error::SearchExhausted {
                state: state.to_string(),
            });
        }
        let index = self.rng.random_range(0..actions.len());
        Ok(actions[index])
    }

    fn evaluation(&mut self, state: &State, player: Player) -> i32 {
        self.game.utility(state, player).value()
    }

    fn leaf_count(&self) -> u64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::TicTacToe;

    #[test]
    fn test_seeded_choices_repeat() {
        let game = TicTacToe::standard();
        let state = game.initial_state();
        let mut a = RandomStrategy::with_seed(&game, 7);
        let mut b = RandomStrategy::with_seed(&game, 7);
        for _ in 0..10 {
            assert_eq!(
                a.action(&state, Player::X).unwrap(),
                b.action(&state, Player::X).unwrap()
            );
        }
    }

    #[test]
    fn test_only_legal_actions() {
        let game = TicTacToe::standard();
        let state = game.parse_state("XOXOX.OX.").unwrap();
        let mut strategy = RandomStrategy::with_seed(&game, 42);
        for _ in 0..20 {
            let action = strategy.action(&state, Player::O).unwrap();
            assert!(action == 5 || action == 8);
        }
        assert_eq!(strategy.leaf_count(), 0);
    }

    #[test]
    fn test_evaluation_is_plain_utility() {
        let game = TicTacToe::standard();
        let state = game.parse_state("XXXOO....").unwrap();
        let mut strategy = RandomStrategy::with_seed(&game, 3);
        assert_eq!(strategy.evaluation(&state, Player::X), 1);
        assert_eq!(strategy.evaluation(&state, Player::O), -1);
        assert_eq!(strategy.leaf_count(), 0);
    }

    #[test]
    fn test_full_board_exhausted() {
        let game = TicTacToe::standard();
        let state = game.parse_state("XOXXOOOXX").unwrap();
        let mut strategy = RandomStrategy::with_seed(&game, 1);
        assert!(matches!(
            strategy.action(&state, Player::X),
            Err(Error::SearchExhausted { .. })
        ));
    }
}
