//! Tic-Tac-Toe solved by exhaustive minimax search.
//!
//! [`tic_tac_toe`] holds the board and win detection, [`minimax`] the
//! search, and [`driver`] a console game loop built on both.

pub mod driver;
pub mod error;
pub mod minimax;
pub mod tic_tac_toe;

pub use error::Error;
pub use minimax::{best, minimax, LOSING, TIE, WINNING};
pub use tic_tac_toe::{Board, Line, Player, Point, Spot, SIZE};
