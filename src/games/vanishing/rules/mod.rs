//! Game rules for vanishing tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Rules never mutate and
//! know nothing about move histories, so the engine and the computer
//! opponent evaluate the same board the same way.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, winning_line};
