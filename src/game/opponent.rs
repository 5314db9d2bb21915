//! Greedy heuristic move search for the automated side.
//!
//! The engine drives Black's whole turn through [`select_move`]: one
//! call picks the single best jump affordable within the remaining
//! budget, and the engine loops until the budget is spent or no legal
//! jump remains.

use tracing::{debug, instrument};

use super::board::Board;
use super::rng::GameRng;
use super::rules::{goal_block, validate_jump};
use super::types::{Coord, Side};
use crate::game::engine::TURN_BUDGET;

/// Cost weight in the candidate score; cost dominates, distance to the
/// goal block only breaks ties among equal-cost jumps.
const COST_WEIGHT: i32 = 100;

/// Every single-axis displacement a legal jump could ever cover.
const OFFSETS: [(i32, i32); 12] = [
    (0, 1),
    (0, 2),
    (0, 3),
    (1, 0),
    (2, 0),
    (3, 0),
    (-1, 0),
    (-2, 0),
    (-3, 0),
    (0, -1),
    (0, -2),
    (0, -3),
];

/// A scored candidate jump for the automated side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Candidate {
    pub from: Coord,
    pub to: Coord,
    pub cost: u8,
    pub score: i32,
}

/// Picks Black's best affordable jump, or `None` when no legal jump
/// fits the remaining budget.
///
/// Pieces already in the goal block stay put. Piece order is shuffled
/// before scanning so that equal scores don't always favor the same
/// piece; among scanned candidates a strictly lower
/// `100·cost + min-Manhattan-distance-to-goal` wins.
#[instrument(skip(board, rng))]
pub(crate) fn select_move(board: &Board, spent: u8, rng: &mut GameRng) -> Option<Candidate> {
    let goal = goal_block(Side::Black);
    let mut movers: Vec<Coord> = board
        .pieces_of(Side::Black)
        .iter()
        .map(|p| p.coord())
        .filter(|c| !goal.contains(c))
        .collect();
    rng.shuffle(&mut movers);

    let mut best: Option<Candidate> = None;
    for from in movers {
        for (dx, dy) in OFFSETS {
            let to = from.offset(dx, dy);
            let Some(cost) = validate_jump(board, from, to) else {
                continue;
            };
            if spent + cost > TURN_BUDGET {
                continue;
            }
            let distance = goal.iter().map(|&g| to.manhattan(g)).min().unwrap_or(0);
            let score = COST_WEIGHT * i32::from(cost) + distance;
            if best.is_none_or(|b| score < b.score) {
                best = Some(Candidate {
                    from,
                    to,
                    cost,
                    score,
                });
            }
        }
    }
    debug!(candidate = ?best, spent, "Opponent move selected");
    best
}
