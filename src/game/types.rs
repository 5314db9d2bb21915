//! Core domain types for the Less board engine.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Side length of the board; the grid is `BOARD_SIZE` × `BOARD_SIZE`.
pub const BOARD_SIZE: i32 = 6;

/// A side in a match.
///
/// White is the human side and always moves first; Black is driven by
/// the heuristic opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    /// The human side, starting in the bottom-right corner block.
    White,
    /// The automated side, starting in the top-left corner block.
    Black,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

/// Direction of a wall bit or a unit step. The y axis grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Toward decreasing y.
    Up,
    /// Toward increasing x.
    Right,
    /// Toward increasing y.
    Down,
    /// Toward decreasing x.
    Left,
}

impl Direction {
    /// All four directions, in wall-bit order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// The wall-mask bit for this direction: up=1, right=2, down=4, left=8.
    pub fn bit(self) -> u8 {
        match self {
            Direction::Up => 1,
            Direction::Right => 2,
            Direction::Down => 4,
            Direction::Left => 8,
        }
    }

    /// The direction faced from the neighboring cell across this edge.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Right => Direction::Left,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
        }
    }

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// A board coordinate.
///
/// Off-board values are representable so jump candidates can be formed
/// before bounds checking; only in-bounds coordinates ever hold pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    x: i32,
    y: i32,
}

impl Coord {
    /// Creates a coordinate.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Column, increasing rightward.
    pub fn x(self) -> i32 {
        self.x
    }

    /// Row, increasing downward.
    pub fn y(self) -> i32 {
        self.y
    }

    /// The coordinate displaced by `(dx, dy)`; may land off the board.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// The neighboring coordinate one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        self.offset(dx, dy)
    }

    /// Whether the coordinate lies on the board.
    pub fn in_bounds(self) -> bool {
        (0..BOARD_SIZE).contains(&self.x) && (0..BOARD_SIZE).contains(&self.y)
    }

    /// Manhattan distance to `other`.
    pub fn manhattan(self, other: Coord) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// One cell's wall mask: a bit per [`Direction`].
///
/// A wall sits on one side of one cell; the facing neighbor may carry
/// the mirrored bit independently, so a single edge crosses 0, 1, or 2
/// wall units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    mask: u8,
}

impl Tile {
    /// The raw 4-bit wall mask.
    pub fn mask(self) -> u8 {
        self.mask
    }

    /// Whether this cell has a wall on the `dir` side.
    pub fn has_wall(self, dir: Direction) -> bool {
        self.mask & dir.bit() != 0
    }

    pub(crate) fn set_wall(&mut self, dir: Direction) {
        self.mask |= dir.bit();
    }
}

/// A piece on the board: owning side plus current location.
///
/// Pieces are created at board setup, relocated by moves, and never
/// destroyed; their lifetime is the match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    side: Side,
    coord: Coord,
}

impl Piece {
    pub(crate) fn new(side: Side, coord: Coord) -> Self {
        Self { side, coord }
    }

    /// The side owning this piece.
    pub fn side(self) -> Side {
        self.side
    }

    /// The piece's current location.
    pub fn coord(self) -> Coord {
        self.coord
    }

    pub(crate) fn relocated(self, coord: Coord) -> Self {
        Self { coord, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_bits_mirror() {
        for dir in Direction::ALL {
            assert_ne!(dir.bit(), dir.opposite().bit());
            assert_eq!(dir.opposite().opposite(), dir);
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(0, 0).in_bounds());
        assert!(Coord::new(5, 5).in_bounds());
        assert!(!Coord::new(6, 0).in_bounds());
        assert!(!Coord::new(0, -1).in_bounds());
    }

    #[test]
    fn test_coord_display() {
        assert_eq!(Coord::new(2, 4).to_string(), "(2,4)");
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coord::new(0, 0).manhattan(Coord::new(3, 2)), 5);
        assert_eq!(Coord::new(4, 4).manhattan(Coord::new(4, 4)), 0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let coord = Coord::new(2, 4);
        let json = serde_json::to_string(&coord).expect("serializes");
        let back: Coord = serde_json::from_str(&json).expect("deserializes");
        assert_eq!(coord, back);

        let side: Side = serde_json::from_str("\"Black\"").expect("deserializes");
        assert_eq!(side, Side::Black);
        assert_eq!(side.to_string(), "Black");
    }
}
