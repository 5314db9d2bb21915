//! Presentation-facing match session.
//!
//! Wraps the engine in shared ownership, wires the countdown clock to
//! it, and hands read-only snapshots to callers. All mutation funnels
//! through the engine lock, so the clock task and the presentation
//! layer can never write concurrently.

use std::sync::{Arc, Mutex};

use tracing::{debug, info, instrument};

use crate::clock::Countdown;
use crate::game::{Coord, MoveOutcome, TurnEngine};

/// A live match plus its clock.
///
/// Cloning shares the underlying engine, so one match can be handed to
/// several observers.
#[derive(Debug, Clone)]
pub struct MatchSession {
    engine: Arc<Mutex<TurnEngine>>,
    clock: Arc<Mutex<Option<Countdown>>>,
}

impl MatchSession {
    /// Creates a session over a fresh entropy-seeded engine.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating match session");
        Self::from_engine(TurnEngine::new())
    }

    /// Creates a session with a fixed seed, for reproducible matches.
    #[instrument]
    pub fn with_seed(seed: u64) -> Self {
        Self::from_engine(TurnEngine::with_seed(seed))
    }

    fn from_engine(engine: TurnEngine) -> Self {
        Self {
            engine: Arc::new(Mutex::new(engine)),
            clock: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts a new match, cancelling any running clock first.
    ///
    /// For timed matches a countdown starts immediately, feeding
    /// remaining seconds into the engine and resolving the match when
    /// it reaches zero. Must be called within a tokio runtime when
    /// `timed` is set.
    #[instrument(skip(self))]
    pub fn configure(&self, player_count: i32, timed: bool, seconds: Option<i64>) {
        self.stop_clock();

        let seconds_left = {
            let mut engine = self.engine.lock().unwrap();
            engine.configure(player_count, timed, seconds);
            engine.seconds_left()
        };

        if let Some(seconds) = seconds_left {
            let tick_engine = Arc::clone(&self.engine);
            let expire_engine = Arc::clone(&self.engine);
            let countdown = Countdown::start(
                seconds,
                move |left| tick_engine.lock().unwrap().tick(left),
                move || expire_engine.lock().unwrap().expire(),
            );
            *self.clock.lock().unwrap() = Some(countdown);
            debug!(seconds, "Countdown started");
        }
    }

    /// Attempts a human move; see [`TurnEngine::try_move`].
    ///
    /// Stops the clock when the move (or the opponent's reply) ends
    /// the match.
    #[instrument(skip(self))]
    pub fn try_move(&self, from: Coord, to: Coord) -> MoveOutcome {
        let (outcome, finished) = {
            let mut engine = self.engine.lock().unwrap();
            let outcome = engine.try_move(from, to);
            (outcome, engine.is_finished())
        };
        if finished {
            self.stop_clock();
        }
        outcome
    }

    /// A cloned read-only view of the engine state.
    pub fn snapshot(&self) -> TurnEngine {
        self.engine.lock().unwrap().clone()
    }

    /// The engine's current change counter, for cheap polling.
    pub fn version(&self) -> u64 {
        self.engine.lock().unwrap().version()
    }

    /// Whether the match has ended.
    pub fn is_finished(&self) -> bool {
        self.engine.lock().unwrap().is_finished()
    }

    /// Subscribes to match log lines appended after this call.
    /// Subscriptions survive reconfiguration.
    pub fn subscribe_log(&self) -> tokio::sync::broadcast::Receiver<String> {
        self.engine.lock().unwrap().log().subscribe()
    }

    fn stop_clock(&self) {
        if let Some(clock) = self.clock.lock().unwrap().take() {
            debug!("Cancelling countdown");
            clock.cancel();
        }
    }
}

impl Default for MatchSession {
    fn default() -> Self {
        Self::new()
    }
}
