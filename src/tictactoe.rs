//! Tic-Tac-Toe game implementation

pub mod board;
pub mod cache;
pub mod game;
pub mod lines;

pub use board::{Action, Player, State, Utility};
pub use cache::{CacheStats, MemoStats};
pub use game::{Game, TicTacToe};
pub use lines::Lines;
