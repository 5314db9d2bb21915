//! The Less game core: board, rules, turn engine, and opponent.

mod board;
mod engine;
mod log;
mod opponent;
mod rng;
pub mod rules;
mod types;

pub use board::{BLACK_START, Board, WHITE_START};
pub use engine::{MoveOutcome, TURN_BUDGET, TurnEngine};
pub use log::MatchLog;
pub use rng::GameRng;
pub use types::{BOARD_SIZE, Coord, Direction, Piece, Side, Tile};
