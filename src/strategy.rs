//! Decision-making strategies
//!
//! A [`Strategy`] wraps a [`Game`] and picks an action for the player to move.
//! The search strategies ([`MinMax`], [`Heuristic`], [`AlphaBeta`]) are thin
//! configurations of the shared [`Search`] engine; [`RandomStrategy`] is a
//! baseline opponent.

pub mod alpha_beta;
pub mod evaluator;
pub mod heuristic;
pub mod minmax;
pub mod random;
pub mod search;

pub use alpha_beta::AlphaBeta;
pub use evaluator::{Evaluator, TERMINAL_WEIGHT, TerminalUtility, WinningLines};
pub use heuristic::Heuristic;
pub use minmax::MinMax;
pub use random::RandomStrategy;
pub use search::{Cutoff, Pruning, Search};

use crate::{
    Result,
    tictactoe::{Action, Game, Player, State},
};

/// Default search depth of the depth-limited strategies
pub const DEFAULT_DEPTH: usize = 3;

/// A policy choosing moves for one seat.
///
/// Board queries go through [`Strategy::game`]; a strategy adds only its
/// search behaviour on top of the wrapped game.
pub trait Strategy {
    type Game: Game;

    /// The game this strategy searches
    fn game(&self) -> &Self::Game;

    /// Short human-readable name
    fn name(&self) -> &str;

    /// Choose an action for `player` in `state`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::SearchExhausted`] if `state` has no legal
    /// actions.
    fn action(&mut self, state: &State, player: Player) -> Result<Action>;

    /// Score `state` from `player`'s perspective.
    ///
    /// Search strategies count every call as an evaluated leaf; strategies
    /// that do not search leave [`Strategy::leaf_count`] at zero.
    fn evaluation(&mut self, state: &State, player: Player) -> i32;

    /// Leaf positions evaluated by search since construction
    fn leaf_count(&self) -> u64;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    type Game = S::Game;

    fn game(&self) -> &Self::Game {
        (**self).game()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn action(&mut self, state: &State, player: Player) -> Result<Action> {
        (**self).action(state, player)
    }

    fn evaluation(&mut self, state: &State, player: Player) -> i32 {
        (**self).evaluation(state, player)
    }

    fn leaf_count(&self) -> u64 {
        (**self).leaf_count()
    }
}

pub(crate) fn check_depth(depth: usize) -> Result<()> {
    if depth == 0 {
        return Err(crate::Error::misconfigured(
            "search depth must be a positive number of plies",
        ));
    }
    Ok(())
}
