//! Board storage and randomized setup.

use std::collections::HashMap;

use tracing::{debug, instrument};

use super::rng::GameRng;
use super::types::{BOARD_SIZE, Coord, Direction, Piece, Side, Tile};

/// Starting block of the White (human) side, bottom-right.
pub const WHITE_START: [Coord; 4] = [
    Coord::new(4, 4),
    Coord::new(5, 4),
    Coord::new(4, 5),
    Coord::new(5, 5),
];

/// Starting block of the Black (automated) side, top-left.
pub const BLACK_START: [Coord; 4] = [
    Coord::new(0, 0),
    Coord::new(1, 0),
    Coord::new(0, 1),
    Coord::new(1, 1),
];

/// The 6×6 playing field: per-cell wall masks plus piece placement.
///
/// Wall geometry is fixed once generated; pieces relocate over the
/// course of a match. At most one piece occupies a cell.
#[derive(Debug, Clone)]
pub struct Board {
    tiles: [Tile; (BOARD_SIZE * BOARD_SIZE) as usize],
    pieces: HashMap<Coord, Piece>,
}

impl Board {
    /// A board with no walls and no pieces, for fixtures and custom
    /// positions.
    pub fn empty() -> Self {
        Self {
            tiles: [Tile::default(); (BOARD_SIZE * BOARD_SIZE) as usize],
            pieces: HashMap::new(),
        }
    }

    /// Generates a fresh match board.
    ///
    /// Places a uniform 4–8 walls on interior cells (a duplicate bit on
    /// the same side of the same cell is re-rolled), each with an
    /// independent 25% chance of the mirrored bit on the facing
    /// neighbor, then seats both sides' pieces in their corner blocks.
    #[instrument(skip(rng))]
    pub fn generate(rng: &mut GameRng) -> Self {
        let mut board = Self::empty();

        let wall_count = rng.gen_range(4..9);
        let mut placed = 0;
        while placed < wall_count {
            let cell = Coord::new(rng.gen_range(1..BOARD_SIZE - 1), rng.gen_range(1..BOARD_SIZE - 1));
            let dir = Direction::ALL[rng.gen_range(0..4) as usize];
            if board.tile(cell).has_wall(dir) {
                continue;
            }
            board.set_wall(cell, dir);
            if rng.gen_bool(0.25) {
                board.set_wall(cell.step(dir), dir.opposite());
            }
            placed += 1;
        }
        debug!(walls = wall_count, "Walls placed");

        for coord in BLACK_START {
            board.place(Side::Black, coord);
        }
        for coord in WHITE_START {
            board.place(Side::White, coord);
        }
        board
    }

    fn tile_index(coord: Coord) -> usize {
        (coord.y() * BOARD_SIZE + coord.x()) as usize
    }

    /// The wall mask at `coord`. Panics off-board.
    pub fn tile(&self, coord: Coord) -> Tile {
        self.tiles[Self::tile_index(coord)]
    }

    /// Adds a wall on the `dir` side of `coord`.
    pub fn set_wall(&mut self, coord: Coord, dir: Direction) {
        self.tiles[Self::tile_index(coord)].set_wall(dir);
    }

    /// Total wall units on the board (source and mirrored bits alike).
    pub fn wall_units(&self) -> u32 {
        self.tiles.iter().map(|t| t.mask().count_ones()).sum()
    }

    /// The piece at `coord`, if any.
    pub fn piece_at(&self, coord: Coord) -> Option<Piece> {
        self.pieces.get(&coord).copied()
    }

    /// All pieces currently on the board, in no particular order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.values().copied()
    }

    /// All pieces belonging to `side`.
    pub fn pieces_of(&self, side: Side) -> Vec<Piece> {
        self.pieces().filter(|p| p.side() == side).collect()
    }

    /// Seats a new piece for `side` at `coord`.
    ///
    /// Placing onto an occupied cell is a programming error.
    pub fn place(&mut self, side: Side, coord: Coord) {
        assert!(coord.in_bounds(), "piece off the board at {coord}");
        let previous = self.pieces.insert(coord, Piece::new(side, coord));
        assert!(previous.is_none(), "two pieces on {coord}");
    }

    /// Relocates the piece at `from` to the empty cell `to`.
    ///
    /// Callers validate the jump first; a missing source piece or an
    /// occupied destination is a programming error.
    pub(crate) fn relocate(&mut self, from: Coord, to: Coord) {
        let piece = self
            .pieces
            .remove(&from)
            .unwrap_or_else(|| panic!("no piece at {from}"));
        let displaced = self.pieces.insert(to, piece.relocated(to));
        assert!(displaced.is_none(), "two pieces on {to}");
    }
}
