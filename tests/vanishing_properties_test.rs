//! Property tests: random selection sequences never break the session.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vanishing_tictactoe::games::vanishing::{check_winner, choose_move, invariants::check_session};
use vanishing_tictactoe::{GameEngine, GameMode, GameStatus, MAX_ACTIVE_MARKERS, Player};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_windows_stay_bounded(moves in prop::collection::vec(0usize..12, 0..80)) {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        for index in moves {
            engine.on_cell_selected(index);
            let session = engine.session();
            for player in [Player::X, Player::O] {
                prop_assert!(session.history(player).len() <= MAX_ACTIVE_MARKERS);
                prop_assert_eq!(session.board().count(player), session.history(player).len());
            }
            prop_assert!(check_session(session).is_ok());
            if !session.is_in_progress() {
                engine.on_reset_requested();
            }
        }
    }

    #[test]
    fn prop_status_matches_board(moves in prop::collection::vec(0usize..9, 0..40)) {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        for index in moves {
            engine.on_cell_selected(index);
        }
        let session = engine.session();
        match session.status() {
            GameStatus::Won(player) => {
                let (winner, line) = check_winner(session.board()).expect("line on board");
                prop_assert_eq!(winner, player);
                prop_assert_eq!(session.winning_line(), Some(line));
            }
            GameStatus::InProgress => prop_assert!(check_winner(session.board()).is_none()),
            GameStatus::Draw => prop_assert!(false, "draw is unreachable with three markers each"),
        }
    }

    #[test]
    fn prop_computer_games_stay_legal(
        moves in prop::collection::vec(0usize..9, 0..40),
        seed in any::<u64>(),
    ) {
        let mut engine = GameEngine::new(GameMode::HumanVsComputer).with_seed(seed);
        for index in moves {
            let transition = engine.on_cell_selected(index);
            if transition.deferred.is_some() {
                engine.run_pending_now();
            }
            let session = engine.session();
            prop_assert!(check_session(session).is_ok());
            if session.is_in_progress() {
                prop_assert_eq!(session.current_player(), Player::X);
            }
        }
    }

    #[test]
    fn prop_ai_picks_empty_square(
        moves in prop::collection::vec(0usize..9, 0..30),
        seed in any::<u64>(),
    ) {
        let mut engine = GameEngine::new(GameMode::HumanVsHuman);
        for index in moves {
            engine.on_cell_selected(index);
        }
        let board = engine.session().board();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        if let Some(pos) = choose_move(board, Player::O, Player::X, &mut rng) {
            prop_assert!(board.is_empty(pos));
        }
    }
}
