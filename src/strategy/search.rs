//! Generic max/min game-tree search
//!
//! The three search strategies share one recursion and differ only in the
//! evaluator called at the leaves, where the recursion stops ([`Cutoff`]) and
//! whether provably irrelevant siblings are skipped ([`Pruning`]).

use log::debug;

use super::evaluator::Evaluator;
use crate::{
    Error, Result,
    tictactoe::{Action, Game, Player, State},
};

/// Where the recursion stops calling children
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cutoff {
    /// Only at terminal states
    Terminal,
    /// At terminal states or after this many plies below the root
    Depth(usize),
}

/// Whether sibling subtrees may be skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pruning {
    /// Visit every child
    Exhaustive,
    /// Alpha-beta cutoffs; the root value is unchanged
    AlphaBeta,
}

/// Best values the maximizer (`alpha`) and minimizer (`beta`) can already
/// guarantee elsewhere in the tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Window {
    alpha: i32,
    beta: i32,
}

impl Window {
    const FULL: Window = Window {
        alpha: i32::MIN,
        beta: i32::MAX,
    };
}

/// Search engine bound to one game.
///
/// The leaf counter accumulates across every call for the lifetime of the
/// engine.
#[derive(Debug)]
pub struct Search<'g, G, E> {
    game: &'g G,
    evaluator: E,
    cutoff: Cutoff,
    pruning: Pruning,
    leafs: u64,
}

impl<'g, G: Game, E: Evaluator<G>> Search<'g, G, E> {
    pub fn new(game: &'g G, evaluator: E, cutoff: Cutoff, pruning: Pruning) -> Self {
        Search {
            game,
            evaluator,
            cutoff,
            pruning,
            leafs: 0,
        }
    }

    pub fn game(&self) -> &'g G {
        self.game
    }

    pub fn evaluator_mut(&mut self) -> &mut E {
        &mut self.evaluator
    }

    /// Number of leaf positions evaluated so far
    pub fn leaf_count(&self) -> u64 {
        self.leafs
    }

    /// Score a leaf position and count it
    pub fn evaluation(&mut self, state: &State, player: Player) -> i32 {
        self.leafs += 1;
        self.evaluator.evaluate(self.game, state, player)
    }

    /// Value of every legal action from `state`, in action order.
    ///
    /// Each action is scored by the minimizing reply to it, searched with a
    /// full window.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SearchExhausted`] when `state` has no legal actions.
    pub fn action_values(&mut self, state: &State, player: Player) -> Result<Vec<(Action, i32)>> {
        let game = self.game;
        game.check_state(state)?;
        let actions = game.actions(state);
        if actions.is_empty() {
            return Err(Error::SearchExhausted {
                state: state.to_string(),
            });
        }

        let remaining = self.budget().map(|plies| plies.saturating_sub(1));
        let mut values = Vec::with_capacity(actions.len());
        for action in actions {
            let child = game.result(state, action)?;
            let value = self.min_value(&child, player, remaining, Window::FULL)?;
            values.push((action, value));
        }
        Ok(values)
    }

    /// The first action achieving the maximal value, with that value
    pub fn best_action(&mut self, state: &State, player: Player) -> Result<(Action, i32)> {
        let leafs_before = self.leafs;
        let values = self.action_values(state, player)?;

        let mut best = values[0];
        for &(action, value) in &values[1..] {
            if value > best.1 {
                best = (action, value);
            }
        }

        debug!(
            "{player} plays {} (value {}, {} leaves this move, {} total)",
            best.0,
            best.1,
            self.leafs - leafs_before,
            self.leafs
        );
        Ok(best)
    }

    /// Value of `state` with `player` to maximize, searched to the full cutoff
    pub fn value(&mut self, state: &State, player: Player) -> Result<i32> {
        self.game.check_state(state)?;
        self.max_value(state, player, self.budget(), Window::FULL)
    }

    fn budget(&self) -> Option<usize> {
        match self.cutoff {
            Cutoff::Terminal => None,
            Cutoff::Depth(plies) => Some(plies),
        }
    }

    fn is_leaf(&self, state: &State, remaining: Option<usize>) -> bool {
        remaining == Some(0) || self.game.terminal_test(state)
    }

    fn max_value(
        &mut self,
        state: &State,
        player: Player,
        remaining: Option<usize>,
        mut window: Window,
    ) -> Result<i32> {
        if self.is_leaf(state, remaining) {
            return Ok(self.evaluation(state, player));
        }

        let game = self.game;
        let mut value = i32::MIN;
        for action in game.actions(state) {
            let child = game.result(state, action)?;
            value = value.max(self.min_value(&child, player, remaining.map(|d| d - 1), window)?);
            if self.pruning == Pruning::AlphaBeta {
                if value >= window.beta {
                    return Ok(value);
                }
                window.alpha = window.alpha.max(value);
            }
        }
        Ok(value)
    }

    fn min_value(
        &mut self,
        state: &State,
        player: Player,
        remaining: Option<usize>,
        mut window: Window,
    ) -> Result<i32> {
        if self.is_leaf(state, remaining) {
            return Ok(self.evaluation(state, player));
        }

        let game = self.game;
        let mut value = i32::MAX;
        for action in game.actions(state) {
            let child = game.result(state, action)?;
            value = value.min(self.max_value(&child, player, remaining.map(|d| d - 1), window)?);
            if self.pruning == Pruning::AlphaBeta {
                if value <= window.alpha {
                    return Ok(value);
                }
                window.beta = window.beta.min(value);
            }
        }
        Ok(value)
    }
}
