use log::debug;

use crate::error::Error;
use crate::tic_tac_toe::{Board, Point};

pub const LOSING: i32 = -1;
pub const TIE: i32 = 0;
pub const WINNING: i32 = 1;

/// Calculate the minimax value of a board.
///
/// `is_opponent_move` selects whether this node maximizes (`true`) or
/// minimizes (`false`). Scores are relative to the side for which the
/// search was started, not to the board's own `player`/`opponent`.
///
/// Returns the score together with the move that reaches it; the move is
/// `None` on terminal boards. Candidates are scanned in row-major order and
/// only replaced on strict improvement, so the first of several equal moves
/// wins. A node stops scanning as soon as it finds the best value it could
/// possibly reach (`WINNING` when maximizing, `LOSING` when minimizing).
pub fn minimax(board: &Board, is_opponent_move: bool) -> (i32, Option<Point>) {
    if board.won().is_some() {
        return if is_opponent_move {
            (LOSING, None)
        } else {
            (WINNING, None)
        };
    }
    if board.no_empty() {
        return (TIE, None);
    }

    let (mut best_value, cutoff) = if is_opponent_move {
        (i32::MIN, WINNING)
    } else {
        (i32::MAX, LOSING)
    };
    let mut best_move = None;

    for point in board.available_moves() {
        let (value, _) = minimax(&board.place(point), !is_opponent_move);
        let improves = if is_opponent_move {
            value > best_value
        } else {
            value < best_value
        };
        if improves {
            best_value = value;
            best_move = Some(point);
            if value == cutoff {
                break;
            }
        }
    }

    (best_value, best_move)
}

/// The best move for the side to move.
///
/// Fails with [`Error::TerminalBoard`] when the game is already over.
pub fn best(board: &Board) -> Result<Point, Error> {
    let (score, best_move) = minimax(board, true);
    let point = best_move.ok_or(Error::TerminalBoard)?;
    debug!("best move for {}: {:?} (score {})", board.player(), point, score);
    Ok(point)
}
