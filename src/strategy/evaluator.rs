//! Static evaluators scoring the positions where search stops

use std::collections::HashMap;

use crate::tictactoe::{Game, Player, State};

/// Weight of a decided game relative to any heuristic score
pub const TERMINAL_WEIGHT: i32 = 100;

/// Scores a leaf position from `player`'s perspective
pub trait Evaluator<G: Game> {
    fn evaluate(&mut self, game: &G, state: &State, player: Player) -> i32;
}

/// Exact game value; only meaningful on terminal states
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalUtility;

impl<G: Game> Evaluator<G> for TerminalUtility {
    fn evaluate(&mut self, game: &G, state: &State, player: Player) -> i32 {
        game.utility(state, player).value()
    }
}

/// Open-lines heuristic.
///
/// A decided position scores `TERMINAL_WEIGHT × utility`; anything else
/// scores the lines `player` could still complete minus the lines the
/// opponent could still complete. Both quantities are memoized.
#[derive(Debug, Clone, Default)]
pub struct WinningLines {
    open_lines: HashMap<(State, Player), i32>,
    scores: HashMap<(State, Player), i32>,
}

impl WinningLines {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of lines holding no opponent mark
    pub fn possible_winning_lines<G: Game>(
        &mut self,
        game: &G,
        state: &State,
        player: Player,
    ) -> i32 {
        *self
            .open_lines
            .entry((state.clone(), player))
            .or_insert_with(|| game.lines().open_for(state, player) as i32)
    }

    pub fn heuristic<G: Game>(&mut self, game: &G, state: &State, player: Player) -> i32 {
        if let Some(&score) = self.scores.get(&(state.clone(), player)) {
            return score;
        }
        let score = if game.terminal_test(state) {
            TERMINAL_WEIGHT * game.utility(state, player).value()
        } else {
            self.possible_winning_lines(game, state, player)
                - self.possible_winning_lines(game, state, -player)
        };
        self.scores.insert((state.clone(), player), score);
        score
    }
}

impl<G: Game> Evaluator<G> for WinningLines {
    fn evaluate(&mut self, game: &G, state: &State, player: Player) -> i32 {
        self.heuristic(game, state, player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::TicTacToe;

    #[test]
    fn test_terminal_utility() {
        let game = TicTacToe::standard();
        let state = game.parse_state("XXXOO....").unwrap();
        assert_eq!(TerminalUtility.evaluate(&game, &state, Player::X), 1);
        assert_eq!(TerminalUtility.evaluate(&game, &state, Player::O), -1);
    }

    #[test]
    fn test_empty_board_is_balanced() {
        let game = TicTacToe::standard();
        let mut eval = WinningLines::new();
        let state = game.initial_state();
        assert_eq!(eval.possible_winning_lines(&game, &state, Player::X), 8);
        assert_eq!(eval.heuristic(&game, &state, Player::X), 0);
    }

    #[test]
    fn test_centre_is_worth_four() {
        let game = TicTacToe::standard();
        let mut eval = WinningLines::new();
        let state = game.result(&game.initial_state(), 4).unwrap();
        assert_eq!(eval.heuristic(&game, &state, Player::X), 4);
        assert_eq!(eval.heuristic(&game, &state, Player::O), -4);
    }

    #[test]
    fn test_terminal_dominates() {
        let game = TicTacToe::standard();
        let mut eval = WinningLines::new();
        let won = game.parse_state("XXXOO....").unwrap();
        assert_eq!(eval.heuristic(&game, &won, Player::X), 100);
        assert_eq!(eval.heuristic(&game, &won, Player::O), -100);

        let drawn = game.parse_state("XOXXOOOXX").unwrap();
        assert_eq!(eval.heuristic(&game, &drawn, Player::X), 0);
    }

    #[test]
    fn test_anti_diagonal_counts_only_open_lines() {
        let game = TicTacToe::standard();
        let mut eval = WinningLines::new();
        // O holds the top-right corner, so X cannot use the anti-diagonal
        let state = game.parse_state("X.O......").unwrap();
        assert_eq!(eval.possible_winning_lines(&game, &state, Player::X), 5);
        assert_eq!(eval.possible_winning_lines(&game, &state, Player::O), 5);
    }
}
