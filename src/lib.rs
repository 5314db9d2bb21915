//! Less game backend - board engine, heuristic opponent, and match
//! history.
//!
//! Less is played on a 6x6 grid with randomized internal walls. Each
//! side owns four pieces and spends a 3-point budget per turn on
//! jumps whose cost depends on walls and occupancy; the first side to
//! seat all four pieces in the opposing corner block wins, and timed
//! matches are resolved by piece positions when the clock runs out.
//!
//! # Architecture
//!
//! - **Game**: board geometry, pure jump/goal rules, the turn engine,
//!   and the greedy opponent that drives the automated side
//! - **Session**: shared-ownership facade wiring the countdown clock
//!   into the engine
//! - **Db/History**: sqlite-backed match records
//! - **Settings**: TOML-backed user preferences
//!
//! # Example
//!
//! ```
//! use less_game::{Coord, MoveOutcome, TurnEngine};
//!
//! let mut engine = TurnEngine::with_seed(42);
//! engine.configure(2, false, None);
//! let outcome = engine.try_move(Coord::new(4, 4), Coord::new(4, 3));
//! assert_ne!(outcome, MoveOutcome::OverBudget);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod clock;
mod db;
mod game;
mod history;
mod session;
mod settings;

// Crate-level exports - clock
pub use clock::Countdown;

// Crate-level exports - persistence
pub use db::{DbError, MatchRecord, MatchRepository, NewMatchRecord};

// Crate-level exports - game core
pub use game::{
    BLACK_START, BOARD_SIZE, Board, Coord, Direction, GameRng, MatchLog, MoveOutcome, Piece, Side,
    TURN_BUDGET, Tile, TurnEngine, WHITE_START, rules,
};

// Crate-level exports - history service
pub use history::HistoryService;

// Crate-level exports - session management
pub use session::MatchSession;

// Crate-level exports - settings
pub use settings::{Settings, SettingsError, SettingsStore};
