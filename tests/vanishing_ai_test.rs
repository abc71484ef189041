//! Tests for the computer opponent's move choice.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use vanishing_tictactoe::games::vanishing::{Reason, choose_move, choose_move_with_reason};
use vanishing_tictactoe::{Board, Player, Position};

fn board(x: &[usize], o: &[usize]) -> Board {
    let mut board = Board::new();
    let x = x.iter().map(|i| (i, Player::X));
    let o = o.iter().map(|i| (i, Player::O));
    for (&index, player) in x.chain(o) {
        let pos = Position::from_index(index).expect("valid index");
        board.place(pos, player).expect("empty square");
    }
    board
}

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(2024)
}

#[test]
fn test_blocks_human_row() {
    let board = board(&[0, 1], &[]);
    assert_eq!(choose_move(&board, Player::O, Player::X, &mut rng()), Some(Position::TopRight));
}

#[test]
fn test_prefers_win_over_block() {
    // O can finish the middle row; X threatens the top row
    let board = board(&[0, 1], &[3, 4]);
    assert_eq!(
        choose_move_with_reason(&board, Player::O, Player::X, &mut rng()),
        Some((Position::MiddleRight, Reason::Win))
    );
}

#[test]
fn test_takes_center_when_nothing_is_forced() {
    let board = board(&[0], &[]);
    assert_eq!(choose_move(&board, Player::O, Player::X, &mut rng()), Some(Position::Center));
}

#[test]
fn test_never_picks_occupied_square() {
    let layouts: [(&[usize], &[usize]); 4] = [
        (&[4], &[]),
        (&[4, 0], &[8]),
        (&[4, 8, 1], &[0, 7]),
        (&[0, 8], &[2, 6, 4]),
    ];
    for (x, o) in layouts {
        let board = board(x, o);
        for seed in 0..20 {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let pos = choose_move(&board, Player::O, Player::X, &mut rng).expect("board has room");
            assert!(board.is_empty(pos), "picked occupied {} on layout {:?}/{:?}", pos, x, o);
        }
    }
}

#[test]
fn test_random_choices_follow_the_seed() {
    let board = board(&[4], &[]);
    let first = choose_move(&board, Player::O, Player::X, &mut rng());
    let second = choose_move(&board, Player::O, Player::X, &mut rng());
    assert_eq!(first, second);
    assert!(Position::CORNERS.contains(&first.expect("corner available")));
}
