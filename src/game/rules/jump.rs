//! Jump validation and cost arithmetic.

use tracing::instrument;

use crate::game::board::Board;
use crate::game::types::{Coord, Direction};

/// Counts the wall units (0–2) on the edge between two adjacent cells.
///
/// Both the source cell's bit and the facing neighbor's mirrored bit
/// count; non-adjacent cells share no edge and contribute nothing.
pub fn walls_between(board: &Board, a: Coord, b: Coord) -> u8 {
    if a.manhattan(b) != 1 {
        return 0;
    }
    let dir = match (b.x() - a.x(), b.y() - a.y()) {
        (1, 0) => Direction::Right,
        (-1, 0) => Direction::Left,
        (0, 1) => Direction::Down,
        _ => Direction::Up,
    };
    let mut units = 0;
    if board.tile(a).has_wall(dir) {
        units += 1;
    }
    if board.tile(b).has_wall(dir.opposite()) {
        units += 1;
    }
    units
}

/// Validates a jump from `from` to `to`, returning its cost (1–3) or
/// `None` when the jump is illegal.
///
/// - Orthogonal single step: 1 plus the wall units on that edge.
/// - Orthogonal double step over an occupied middle cell with no walls
///   on either edge: 1.
/// - Orthogonal double step over an empty middle cell with 1–2 wall
///   units across both edges: 1 plus the units.
/// - Everything else (diagonals, longer displacements, occupied or
///   off-board destinations) is illegal.
#[instrument(skip(board), level = "debug")]
pub fn validate_jump(board: &Board, from: Coord, to: Coord) -> Option<u8> {
    if !to.in_bounds() || board.piece_at(to).is_some() {
        return None;
    }

    let dx = to.x() - from.x();
    let dy = to.y() - from.y();
    let (ax, ay) = (dx.abs(), dy.abs());

    if ax + ay == 1 {
        return Some(1 + walls_between(board, from, to));
    }

    if (ax == 2 && dy == 0) || (ay == 2 && dx == 0) {
        let mid = from.offset(dx / 2, dy / 2);
        let occupied = board.piece_at(mid).is_some();
        let total_walls = walls_between(board, from, mid) + walls_between(board, mid, to);
        return match (occupied, total_walls) {
            (true, 0) => Some(1),
            (false, 1..=2) => Some(1 + total_walls),
            _ => None,
        };
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Side;

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_single_step_no_walls_costs_one() {
        let board = Board::empty();
        assert_eq!(validate_jump(&board, c(0, 0), c(1, 0)), Some(1));
        assert_eq!(validate_jump(&board, c(3, 3), c(3, 2)), Some(1));
    }

    #[test]
    fn test_single_step_walls_raise_cost() {
        let mut board = Board::empty();
        board.set_wall(c(0, 0), Direction::Right);
        assert_eq!(validate_jump(&board, c(0, 0), c(1, 0)), Some(2));

        // Mirrored bit on the facing cell makes a second unit.
        board.set_wall(c(1, 0), Direction::Left);
        assert_eq!(validate_jump(&board, c(0, 0), c(1, 0)), Some(3));
        // The same edge seen from the other side.
        assert_eq!(validate_jump(&board, c(1, 0), c(0, 0)), Some(3));
    }

    #[test]
    fn test_double_step_over_piece_costs_one() {
        let mut board = Board::empty();
        board.place(Side::Black, c(1, 0));
        assert_eq!(validate_jump(&board, c(0, 0), c(2, 0)), Some(1));
    }

    #[test]
    fn test_double_step_over_empty_cell_needs_walls() {
        let board = Board::empty();
        // No piece and no wall to jump: not a jump at all.
        assert_eq!(validate_jump(&board, c(0, 0), c(2, 0)), None);

        let mut board = Board::empty();
        board.set_wall(c(1, 0), Direction::Left);
        assert_eq!(validate_jump(&board, c(0, 0), c(2, 0)), Some(2));
        board.set_wall(c(1, 0), Direction::Right);
        assert_eq!(validate_jump(&board, c(0, 0), c(2, 0)), Some(3));
    }

    #[test]
    fn test_double_step_over_piece_with_walls_is_illegal() {
        let mut board = Board::empty();
        board.place(Side::Black, c(1, 0));
        board.set_wall(c(1, 0), Direction::Left);
        assert_eq!(validate_jump(&board, c(0, 0), c(2, 0)), None);
    }

    #[test]
    fn test_diagonal_is_illegal() {
        let board = Board::empty();
        assert_eq!(validate_jump(&board, c(0, 0), c(1, 1)), None);
        assert_eq!(validate_jump(&board, c(3, 3), c(1, 1)), None);
    }

    #[test]
    fn test_distance_three_is_illegal() {
        let board = Board::empty();
        assert_eq!(validate_jump(&board, c(0, 0), c(3, 0)), None);
        assert_eq!(validate_jump(&board, c(0, 0), c(0, 3)), None);
    }

    #[test]
    fn test_occupied_destination_is_illegal() {
        let mut board = Board::empty();
        board.place(Side::White, c(1, 0));
        assert_eq!(validate_jump(&board, c(0, 0), c(1, 0)), None);
    }

    #[test]
    fn test_off_board_destination_is_illegal() {
        let board = Board::empty();
        assert_eq!(validate_jump(&board, c(5, 5), c(6, 5)), None);
        assert_eq!(validate_jump(&board, c(0, 0), c(0, -1)), None);
    }

    #[test]
    fn test_walls_between_ignores_non_adjacent() {
        let mut board = Board::empty();
        board.set_wall(c(1, 0), Direction::Left);
        assert_eq!(walls_between(&board, c(0, 0), c(2, 0)), 0);
    }
}
