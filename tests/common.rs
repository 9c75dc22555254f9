//! Shared helpers for the integration suites

#![allow(dead_code)]

use std::collections::{HashSet, VecDeque};

use gamesearch::{Game, State, TicTacToe};

/// Every state reachable from the initial position by legal play, including
/// terminal ones, in breadth-first order.
pub fn reachable_states(game: &TicTacToe) -> Vec<State> {
    let mut seen = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::from([game.initial_state()]);

    while let Some(state) = queue.pop_front() {
        if !seen.insert(state.clone()) {
            continue;
        }
        order.push(state.clone());
        if game.terminal_test(&state) {
            continue;
        }
        for action in game.actions(&state) {
            queue.push_back(game.result(&state, action).expect("legal action"));
        }
    }
    order
}

pub fn parse(game: &TicTacToe, board: &str) -> State {
    game.parse_state(board)
        .unwrap_or_else(|err| panic!("bad test board {board:?}: {err}"))
}
