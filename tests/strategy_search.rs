//! Behaviour of the search strategies on full games and fixed positions

mod common;

use gamesearch::{
    AlphaBeta, Game, GameOutcome, Heuristic, Match, MinMax, Player, RandomStrategy, Strategy,
    TicTacToe,
};

use common::parse;

mod optimal_play {
    use super::*;

    #[test]
    fn test_minmax_self_play_draws() {
        let game = TicTacToe::standard();
        let mut x = MinMax::new(&game);
        let mut o = MinMax::new(&game);
        let report = Match::new(&game).play(&mut x, &mut o).unwrap();

        assert_eq!(report.outcome, GameOutcome::Draw);
        assert_eq!(report.moves.len(), 9);
        assert_eq!(report.moves[0].position, 0);
    }

    #[test]
    fn test_minmax_never_loses_to_random() {
        let game = TicTacToe::standard();
        for seed in 0..3 {
            let mut minmax = MinMax::new(&game);
            let mut random = RandomStrategy::with_seed(&game, seed);
            let report = Match::new(&game).play(&mut minmax, &mut random).unwrap();
            assert_ne!(report.outcome, GameOutcome::Win(Player::O), "seed {seed}");

            let mut minmax = MinMax::new(&game);
            let mut random = RandomStrategy::with_seed(&game, seed);
            let report = Match::new(&game).play(&mut random, &mut minmax).unwrap();
            assert_ne!(report.outcome, GameOutcome::Win(Player::X), "seed {seed}");
        }
    }

    #[test]
    fn test_minmax_takes_immediate_win() {
        let game = TicTacToe::standard();
        let state = parse(&game, "XX.OO....");
        let mut strategy = MinMax::new(&game);
        assert_eq!(strategy.action(&state, Player::X).unwrap(), 2);
        assert_eq!(strategy.value(&state, Player::X).unwrap(), 1);
    }

    #[test]
    fn test_empty_board_value_is_draw() {
        let game = TicTacToe::standard();
        let mut strategy = MinMax::new(&game);
        assert_eq!(strategy.value(&game.initial_state(), Player::X).unwrap(), 0);
    }
}

mod pruning {
    use super::*;

    const POSITIONS: [&str; 4] = [".........", "....X....", "X...O....", "X.O.X...O"];

    #[test]
    fn test_alpha_beta_matches_heuristic() {
        let game = TicTacToe::standard();
        for board in POSITIONS {
            let state = parse(&game, board);
            let player = game.to_move(&state);
            for depth in 1..=4 {
                let mut heuristic = Heuristic::new(&game, depth).unwrap();
                let mut pruned = AlphaBeta::new(&game, depth).unwrap();

                assert_eq!(
                    heuristic.action(&state, player).unwrap(),
                    pruned.action(&state, player).unwrap(),
                    "{board} at depth {depth}"
                );
                assert!(
                    pruned.leaf_count() <= heuristic.leaf_count(),
                    "{board} at depth {depth}: {} > {}",
                    pruned.leaf_count(),
                    heuristic.leaf_count()
                );
            }
        }
    }

    #[test]
    fn test_full_depth_alpha_beta_self_play_draws() {
        // Deep enough that every leaf is terminal
        let game = TicTacToe::standard();
        let mut x = AlphaBeta::new(&game, 9).unwrap();
        let mut o = AlphaBeta::new(&game, 9).unwrap();
        let report = Match::new(&game).play(&mut x, &mut o).unwrap();
        assert_eq!(report.outcome, GameOutcome::Draw);
    }

    #[test]
    fn test_rectangular_board_search() {
        let game = TicTacToe::new(3, 4).unwrap();
        let state = parse(&game, "XXX.OOO.....");
        let mut heuristic = Heuristic::new(&game, 2).unwrap();
        let mut pruned = AlphaBeta::new(&game, 2).unwrap();

        // Completes the top row
        assert_eq!(heuristic.action(&state, Player::X).unwrap(), 3);
        assert_eq!(pruned.action(&state, Player::X).unwrap(), 3);
        assert!(pruned.leaf_count() <= heuristic.leaf_count());
    }
}

mod heuristic_scores {
    use super::*;

    #[test]
    fn test_open_lines_count() {
        let game = TicTacToe::standard();
        let mut strategy = Heuristic::new(&game, 1).unwrap();
        let centre = parse(&game, "....X....");
        assert_eq!(strategy.possible_winning_lines(&centre, Player::X), 8);
        assert_eq!(strategy.possible_winning_lines(&centre, Player::O), 4);
        assert_eq!(strategy.heuristic(&centre, Player::X), 4);
        assert_eq!(strategy.heuristic(&centre, Player::O), -4);
    }

    #[test]
    fn test_terminal_scores_dominate() {
        let game = TicTacToe::standard();
        let mut strategy = Heuristic::new(&game, 1).unwrap();
        let won = parse(&game, "XXXOO....");
        assert_eq!(strategy.heuristic(&won, Player::X), 100);
        assert_eq!(strategy.heuristic(&won, Player::O), -100);
    }
}
