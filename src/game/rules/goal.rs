//! Match-ending conditions: goal completion and time-expiry tests.

use tracing::instrument;

use crate::game::board::{BLACK_START, Board, WHITE_START};
use crate::game::types::{Coord, Side};

/// The 2×2 corner block a side starts in.
pub fn start_block(side: Side) -> [Coord; 4] {
    match side {
        Side::White => WHITE_START,
        Side::Black => BLACK_START,
    }
}

/// The 2×2 block a side must occupy to win: the opponent's start.
pub fn goal_block(side: Side) -> [Coord; 4] {
    start_block(side.opponent())
}

/// Whether all four goal cells hold pieces of `side`.
///
/// A side wins the instant this holds, regardless of remaining budget.
#[instrument(skip(board))]
pub fn all_in_goal(board: &Board, side: Side) -> bool {
    goal_block(side)
        .iter()
        .all(|&coord| board.piece_at(coord).map(|p| p.side()) == Some(side))
}

/// Whether `side` still has at least one piece in its own starting
/// block. Used by time-expiry resolution.
#[instrument(skip(board))]
pub fn stuck_in_start(board: &Board, side: Side) -> bool {
    start_block(side)
        .iter()
        .any(|&coord| board.piece_at(coord).map(|p| p.side()) == Some(side))
}

/// How many of `side`'s pieces already sit in its goal block; the
/// progress proxy compared when time expires with neither side stuck.
#[instrument(skip(board))]
pub fn pieces_in_goal(board: &Board, side: Side) -> usize {
    goal_block(side)
        .iter()
        .filter(|&&coord| board.piece_at(coord).map(|p| p.side()) == Some(side))
        .count()
}
