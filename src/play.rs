//! Match runner: alternate two strategies until the game ends

use std::time::{Duration, Instant};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    strategy::Strategy,
    tictactoe::{Action, Game, Player, State},
};

/// A single ply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: Action,
    pub player: Player,
}

/// Outcome of a finished match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

impl GameOutcome {
    /// Result line from `player`'s point of view
    pub fn describe_for(self, player: Player) -> &'static str {
        match self {
            GameOutcome::Draw => "Draw",
            GameOutcome::Win(winner) if winner == player => "You win",
            GameOutcome::Win(_) => "You lose",
        }
    }
}

/// Everything observed while playing one match
#[derive(Debug, Clone)]
pub struct MatchReport {
    pub final_state: State,
    pub moves: Vec<Move>,
    pub outcome: GameOutcome,
    /// Leaf counters of the `X` and `O` strategies at the end of the match
    pub leafs: (u64, u64),
    pub elapsed: Duration,
}

impl MatchReport {
    pub fn total_leafs(&self) -> u64 {
        self.leafs.0 + self.leafs.1
    }
}

/// Plays one match on a game
pub struct Match<'g, G> {
    game: &'g G,
    observer: Option<Box<dyn FnMut(&State, Move) + 'g>>,
}

impl<'g, G: Game> Match<'g, G> {
    pub fn new(game: &'g G) -> Self {
        Match {
            game,
            observer: None,
        }
    }

    /// Call `observer` with the new state after every ply
    pub fn with_observer(mut self, observer: impl FnMut(&State, Move) + 'g) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Play from the initial state; `x` moves first
    pub fn play<X, O>(&mut self, x: &mut X, o: &mut O) -> Result<MatchReport>
    where
        X: Strategy<Game = G> + ?Sized,
        O: Strategy<Game = G> + ?Sized,
    {
        self.play_from(self.game.initial_state(), x, o)
    }

    /// Play from `state`, letting the inferred mover's strategy choose each ply
    pub fn play_from<X, O>(&mut self, state: State, x: &mut X, o: &mut O) -> Result<MatchReport>
    where
        X: Strategy<Game = G> + ?Sized,
        O: Strategy<Game = G> + ?Sized,
    {
        let game = self.game;
        game.check_state(&state)?;
        let start = Instant::now();
        let mut state = state;
        let mut moves = Vec::new();

        while !game.terminal_test(&state) {
            let player = game.to_move(&state);
            let position = match player {
                Player::O => o.action(&state, player)?,
                _ => x.action(&state, player)?,
            };
            state = game.result(&state, position)?;

            let ply = Move { position, player };
            debug!("ply {}: {player} -> {position} ({state})", moves.len() + 1);
            if let Some(observer) = self.observer.as_mut() {
                observer(&state, ply);
            }
            moves.push(ply);
        }

        let outcome = match game.winner(&state) {
            Some(winner) => GameOutcome::Win(winner),
            None => GameOutcome::Draw,
        };
        let report = MatchReport {
            final_state: state,
            moves,
            outcome,
            leafs: (x.leaf_count(), o.leaf_count()),
            elapsed: start.elapsed(),
        };
        info!(
            "{} vs {}: {:?} after {} plies, {} leaves evaluated",
            x.name(),
            o.name(),
            report.outcome,
            report.moves.len(),
            report.total_leafs()
        );
        Ok(report)
    }
}
