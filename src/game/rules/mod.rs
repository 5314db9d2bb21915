//! Game rules for Less.
//!
//! Pure functions evaluating jump legality, cost, and match-ending
//! conditions against a board. Rules never mutate state; the engine
//! composes them into the turn loop.

pub mod goal;
pub mod jump;

pub use goal::{all_in_goal, goal_block, pieces_in_goal, start_block, stuck_in_start};
pub use jump::{validate_jump, walls_between};
