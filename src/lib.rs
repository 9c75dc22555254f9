//! Game-tree search for two-player, zero-sum, perfect-information games
//!
//! This crate provides:
//! - Tic-Tac-Toe on any `height × width` board behind the [`Game`] trait
//! - Memoized game queries keyed by immutable [`State`] values
//! - Exhaustive minimax, depth-limited heuristic and alpha-beta strategies
//! - A match runner, JSON match configuration and a small CLI
//!
//! ```
//! use gamesearch::{AlphaBeta, Game, Player, Strategy, TicTacToe};
//!
//! let game = TicTacToe::standard();
//! let state = game.parse_state("XX.OO....")?;
//! let mut strategy = AlphaBeta::new(&game, 3)?;
//! assert_eq!(strategy.action(&state, Player::X)?, 2);
//! # Ok::<(), gamesearch::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod play;
pub mod strategy;
pub mod tictactoe;

pub use config::{GameConfig, MatchConfig, StrategyConfig, StrategyKind};
pub use error::{Error, Result};
pub use play::{GameOutcome, Match, MatchReport, Move};
pub use strategy::{AlphaBeta, Heuristic, MinMax, RandomStrategy, Strategy};
pub use tictactoe::{Action, Game, Player, State, TicTacToe, Utility};
