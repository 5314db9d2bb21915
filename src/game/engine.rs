//! Turn orchestration: budgets, move application, hand-off to the
//! automated side, and match resolution.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::board::Board;
use super::log::MatchLog;
use super::opponent;
use super::rng::GameRng;
use super::rules::{all_in_goal, pieces_in_goal, stuck_in_start, validate_jump};
use super::types::{Coord, Side};

/// Movement points available per turn.
pub const TURN_BUDGET: u8 = 3;

/// Outcome of a human move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The jump was applied.
    Success,
    /// No piece, wrong side, wrong turn, finished match, or an illegal
    /// jump. State is unchanged.
    Invalid,
    /// The jump is legal but its cost would exceed the remaining
    /// budget. State is unchanged.
    OverBudget,
}

/// The single owner of all mutable match state.
///
/// White (the human side) moves through [`try_move`]; when its budget
/// is spent the engine drives Black's whole turn synchronously before
/// returning. The countdown clock reaches in through [`tick`] and
/// [`expire`]. Readers watch the [`version`] counter and the log.
///
/// [`try_move`]: TurnEngine::try_move
/// [`tick`]: TurnEngine::tick
/// [`expire`]: TurnEngine::expire
/// [`version`]: TurnEngine::version
#[derive(Debug, Clone)]
pub struct TurnEngine {
    board: Board,
    current: Side,
    spent: u8,
    player_count: i32,
    timed: bool,
    seconds_left: Option<i64>,
    winner: Option<Side>,
    draw: bool,
    version: u64,
    log: MatchLog,
    rng: GameRng,
}

impl TurnEngine {
    /// Creates an engine over an entropy-seeded RNG and starts a
    /// default untimed two-player match.
    pub fn new() -> Self {
        Self::with_rng(GameRng::from_entropy())
    }

    /// Creates an engine with a fixed seed; the board layout and the
    /// opponent's tie-breaking are then fully reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameRng::new(seed))
    }

    fn with_rng(rng: GameRng) -> Self {
        let mut engine = Self {
            board: Board::empty(),
            current: Side::White,
            spent: 0,
            player_count: 2,
            timed: false,
            seconds_left: None,
            winner: None,
            draw: false,
            version: 0,
            log: MatchLog::new(),
            rng,
        };
        engine.configure(2, false, None);
        engine
    }

    /// Creates an engine over a prepared board: an untimed two-player
    /// match with White to move. Used for scripted and custom
    /// positions.
    pub fn with_position(board: Board) -> Self {
        let mut engine = Self::with_rng(GameRng::from_entropy());
        engine.reset(board, 2, false, None);
        engine
    }

    /// Starts a new match, abandoning any match in progress.
    ///
    /// Regenerates the board, clears the log and all flags, and gives
    /// White the first turn. A missing or non-positive `seconds` falls
    /// back to 60; the player count is stored as given (only 2 is
    /// functionally supported).
    #[instrument(skip(self))]
    pub fn configure(&mut self, player_count: i32, timed: bool, seconds: Option<i64>) {
        let board = Board::generate(&mut self.rng);
        self.reset(board, player_count, timed, seconds);
        info!(player_count, timed, "Match configured");
    }

    fn reset(&mut self, board: Board, player_count: i32, timed: bool, seconds: Option<i64>) {
        let seconds = seconds.filter(|s| *s > 0).unwrap_or(60);
        self.board = board;
        self.current = Side::White;
        self.spent = 0;
        self.player_count = player_count;
        self.timed = timed;
        self.seconds_left = timed.then_some(seconds);
        self.winner = None;
        self.draw = false;
        self.log.clear();
        self.log.append(format!(
            "Match start {} - {} players",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            player_count
        ));
        self.version += 1;
    }

    /// Attempts a human jump from `from` to `to`.
    ///
    /// On success the move is applied and logged; completing the goal
    /// block ends the match at once, and spending the last budget
    /// point hands the turn to Black, whose entire reply runs before
    /// this call returns.
    #[instrument(skip(self))]
    pub fn try_move(&mut self, from: Coord, to: Coord) -> MoveOutcome {
        if self.is_finished() {
            debug!("Move attempted after match end");
            return MoveOutcome::Invalid;
        }
        let Some(piece) = self.board.piece_at(from) else {
            return MoveOutcome::Invalid;
        };
        if piece.side() != Side::White || self.current != Side::White {
            warn!(side = %piece.side(), current = %self.current, "Out-of-turn move rejected");
            return MoveOutcome::Invalid;
        }
        let Some(cost) = validate_jump(&self.board, from, to) else {
            return MoveOutcome::Invalid;
        };
        if self.spent + cost > TURN_BUDGET {
            debug!(cost, spent = self.spent, "Move exceeds budget");
            return MoveOutcome::OverBudget;
        }

        self.apply(Side::White, from, to, cost);
        self.spent += cost;

        if all_in_goal(&self.board, Side::White) {
            self.finish_by_goal();
            return MoveOutcome::Success;
        }
        if self.spent >= TURN_BUDGET {
            self.run_opponent_turn();
        }
        MoveOutcome::Success
    }

    fn apply(&mut self, side: Side, from: Coord, to: Coord, cost: u8) {
        self.board.relocate(from, to);
        self.log
            .append(format!("{side}: {from} -> {to} (cost {cost})"));
        self.version += 1;
    }

    fn finish_by_goal(&mut self) {
        self.winner = Some(self.current);
        self.log.append(format!("{} wins by goal", self.current));
        self.version += 1;
        info!(winner = %self.current, "Match finished by goal");
    }

    /// Black's entire turn, driven to completion synchronously.
    fn run_opponent_turn(&mut self) {
        self.current = Side::Black;
        self.spent = 0;
        self.version += 1;

        let mut spent = 0;
        while spent < TURN_BUDGET {
            let Some(mv) = opponent::select_move(&self.board, spent, &mut self.rng) else {
                debug!(spent, "No affordable jump left; budget forfeited");
                break;
            };
            self.apply(Side::Black, mv.from, mv.to, mv.cost);
            spent += mv.cost;
            if all_in_goal(&self.board, Side::Black) {
                self.finish_by_goal();
                return;
            }
        }
        self.current = Side::White;
        self.version += 1;
    }

    /// Records the clock's remaining seconds. Ignored once finished.
    pub fn tick(&mut self, seconds_left: i64) {
        if self.is_finished() {
            return;
        }
        self.seconds_left = Some(seconds_left);
        self.version += 1;
    }

    /// Resolves the match on clock expiry.
    ///
    /// A side with a piece still in its own starting block loses to an
    /// unstuck opponent; otherwise the side with strictly more pieces
    /// in the opposing starting block wins, and equal counts draw.
    #[instrument(skip(self))]
    pub fn expire(&mut self) {
        if self.is_finished() {
            return;
        }
        self.seconds_left = Some(0);

        let white_stuck = stuck_in_start(&self.board, Side::White);
        let black_stuck = stuck_in_start(&self.board, Side::Black);
        let winner = match (white_stuck, black_stuck) {
            (true, false) => Some(Side::Black),
            (false, true) => Some(Side::White),
            _ => {
                let white = pieces_in_goal(&self.board, Side::White);
                let black = pieces_in_goal(&self.board, Side::Black);
                match white.cmp(&black) {
                    std::cmp::Ordering::Greater => Some(Side::White),
                    std::cmp::Ordering::Less => Some(Side::Black),
                    std::cmp::Ordering::Equal => None,
                }
            }
        };

        match winner {
            Some(side) => {
                self.winner = Some(side);
                self.log.append(format!("Time expired: {side} wins"));
                info!(winner = %side, "Match finished by time");
            }
            None => {
                self.draw = true;
                self.log.append("Time expired: draw");
                info!("Match drawn on time");
            }
        }
        self.version += 1;
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn current(&self) -> Side {
        self.current
    }

    /// Budget points White has spent this turn (0–3).
    pub fn spent(&self) -> u8 {
        self.spent
    }

    /// Configured player count.
    pub fn player_count(&self) -> i32 {
        self.player_count
    }

    /// Whether this match runs against the clock.
    pub fn timed(&self) -> bool {
        self.timed
    }

    /// Remaining seconds, absent for untimed matches.
    pub fn seconds_left(&self) -> Option<i64> {
        self.seconds_left
    }

    /// The winning side, once decided.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    /// Whether the match ended in a draw.
    pub fn is_draw(&self) -> bool {
        self.draw
    }

    /// Whether the match has ended by goal, time, or draw.
    pub fn is_finished(&self) -> bool {
        self.winner.is_some() || self.draw
    }

    /// Monotonically increasing change counter; bumps on every
    /// mutation so readers can poll for changes cheaply.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// The match log.
    pub fn log(&self) -> &MatchLog {
        &self.log
    }
}

impl Default for TurnEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::{BLACK_START, WHITE_START};

    fn c(x: i32, y: i32) -> Coord {
        Coord::new(x, y)
    }

    #[test]
    fn test_moving_black_piece_is_invalid() {
        let mut board = Board::empty();
        board.place(Side::Black, c(0, 0));
        board.place(Side::White, c(5, 5));
        let mut engine = TurnEngine::with_position(board);
        assert_eq!(engine.try_move(c(0, 0), c(0, 1)), MoveOutcome::Invalid);
    }

    #[test]
    fn test_moving_from_empty_cell_is_invalid() {
        let mut engine = TurnEngine::with_position(Board::empty());
        assert_eq!(engine.try_move(c(3, 3), c(3, 4)), MoveOutcome::Invalid);
    }

    #[test]
    fn test_over_budget_leaves_state_unchanged() {
        let mut board = Board::empty();
        board.place(Side::White, c(3, 0));
        // Two wall units across (3,0)-(3,1): a cost-3 step.
        board.set_wall(c(3, 0), crate::game::types::Direction::Down);
        board.set_wall(c(3, 1), crate::game::types::Direction::Up);
        let mut engine = TurnEngine::with_position(board);

        assert_eq!(engine.try_move(c(3, 0), c(2, 0)), MoveOutcome::Success);
        let version = engine.version();
        assert_eq!(engine.try_move(c(2, 0), c(3, 0)), MoveOutcome::Success);
        // Spent 2 of 3; the cost-3 step no longer fits.
        assert_eq!(engine.try_move(c(3, 0), c(3, 1)), MoveOutcome::OverBudget);
        assert!(engine.board().piece_at(c(3, 0)).is_some());
        assert_eq!(engine.spent(), 2);
        assert_eq!(engine.version(), version + 1);
    }

    #[test]
    fn test_turn_passes_back_after_opponent_with_no_pieces() {
        let mut board = Board::empty();
        board.place(Side::White, c(3, 3));
        let mut engine = TurnEngine::with_position(board);
        for (from, to) in [(c(3, 3), c(3, 2)), (c(3, 2), c(3, 1)), (c(3, 1), c(2, 1))] {
            assert_eq!(engine.try_move(from, to), MoveOutcome::Success);
        }
        // Budget exhausted; Black had nothing to move, so White is up
        // again with a fresh budget.
        assert_eq!(engine.current(), Side::White);
        assert_eq!(engine.spent(), 0);
    }

    #[test]
    fn test_goal_completion_wins_immediately() {
        let mut board = Board::empty();
        board.place(Side::White, BLACK_START[0]);
        board.place(Side::White, BLACK_START[2]);
        board.place(Side::White, BLACK_START[3]);
        board.place(Side::White, c(2, 0));
        let mut engine = TurnEngine::with_position(board);

        assert_eq!(engine.try_move(c(2, 0), c(1, 0)), MoveOutcome::Success);
        assert!(engine.is_finished());
        assert_eq!(engine.winner(), Some(Side::White));
        let last = engine.log().lines().last().expect("a log line");
        assert!(last.contains("White"), "last line was {last:?}");
    }

    #[test]
    fn test_no_moves_accepted_after_finish() {
        let mut board = Board::empty();
        board.place(Side::White, BLACK_START[0]);
        board.place(Side::White, BLACK_START[2]);
        board.place(Side::White, BLACK_START[3]);
        board.place(Side::White, c(2, 0));
        let mut engine = TurnEngine::with_position(board);
        engine.try_move(c(2, 0), c(1, 0));
        assert!(engine.is_finished());
        assert_eq!(engine.try_move(c(1, 0), c(2, 0)), MoveOutcome::Invalid);
    }

    #[test]
    fn test_opponent_win_short_circuits() {
        let mut board = Board::empty();
        board.place(Side::Black, WHITE_START[0]);
        board.place(Side::Black, WHITE_START[1]);
        board.place(Side::Black, WHITE_START[2]);
        // One jump from completion: (5,3) over the piece on (5,4).
        board.place(Side::Black, c(5, 3));
        board.place(Side::White, c(0, 3));
        let mut engine = TurnEngine::with_position(board);

        for (from, to) in [(c(0, 3), c(0, 2)), (c(0, 2), c(0, 3)), (c(0, 3), c(0, 2))] {
            assert_eq!(engine.try_move(from, to), MoveOutcome::Success);
        }
        assert!(engine.is_finished());
        assert_eq!(engine.winner(), Some(Side::Black));
    }

    #[test]
    fn test_expiry_with_stuck_side() {
        let mut board = Board::empty();
        board.place(Side::White, WHITE_START[0]);
        board.place(Side::Black, c(3, 3));
        let mut engine = TurnEngine::with_position(board);
        engine.expire();
        assert_eq!(engine.winner(), Some(Side::Black));
        assert!(engine.is_finished());
    }

    #[test]
    fn test_expiry_compares_progress_counts() {
        let mut board = Board::empty();
        board.place(Side::White, BLACK_START[0]);
        board.place(Side::White, BLACK_START[1]);
        board.place(Side::Black, WHITE_START[0]);
        let mut engine = TurnEngine::with_position(board);
        engine.expire();
        assert_eq!(engine.winner(), Some(Side::White));
    }

    #[test]
    fn test_expiry_equal_progress_draws() {
        let mut board = Board::empty();
        board.place(Side::White, c(2, 2));
        board.place(Side::Black, c(3, 3));
        let mut engine = TurnEngine::with_position(board);
        engine.expire();
        assert!(engine.is_draw());
        assert!(engine.winner().is_none());
        assert_eq!(
            engine.log().lines().last().map(String::as_str),
            Some("Time expired: draw")
        );
    }

    #[test]
    fn test_expire_is_idempotent_once_finished() {
        let mut board = Board::empty();
        board.place(Side::White, c(2, 2));
        board.place(Side::Black, c(3, 3));
        let mut engine = TurnEngine::with_position(board);
        engine.expire();
        let version = engine.version();
        let lines = engine.log().len();
        engine.expire();
        assert_eq!(engine.version(), version);
        assert_eq!(engine.log().len(), lines);
    }

    #[test]
    fn test_configure_abandons_running_match() {
        let mut engine = TurnEngine::with_seed(11);
        engine.configure(2, true, Some(30));
        assert_eq!(engine.seconds_left(), Some(30));
        assert!(engine.timed());
        engine.configure(2, false, None);
        assert_eq!(engine.seconds_left(), None);
        assert!(!engine.is_finished());
        assert_eq!(engine.log().len(), 1);
    }

    #[test]
    fn test_configure_sanitizes_seconds() {
        let mut engine = TurnEngine::with_seed(11);
        engine.configure(2, true, Some(-5));
        assert_eq!(engine.seconds_left(), Some(60));
        engine.configure(2, true, None);
        assert_eq!(engine.seconds_left(), Some(60));
    }
}
