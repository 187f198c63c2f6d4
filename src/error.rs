use thiserror::Error;

use crate::tic_tac_toe::{Player, SIZE};

/// Contract violations reported by the board and the search.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid move ({x}, {y}): coordinates must be below {}", SIZE)]
    OutOfBounds { x: usize, y: usize },

    #[error("invalid non empty move ({x}, {y}), occupied by {occupant}")]
    Occupied {
        x: usize,
        y: usize,
        occupant: Player,
    },

    #[error("no move to search for: the game is already over")]
    TerminalBoard,
}
