//! Match history business logic layer.

use tracing::{debug, info, instrument};

use crate::db::{DbError, MatchRecord, MatchRepository, NewMatchRecord};
use crate::game::TurnEngine;

/// Service layer over [`MatchRepository`].
///
/// Assembles records from finished engines and exposes the history
/// queries the presentation layer needs.
#[derive(Debug, Clone)]
pub struct HistoryService {
    repository: MatchRepository,
}

impl HistoryService {
    /// Creates a history service backed by the given repository.
    #[instrument(skip(repository))]
    pub fn new(repository: MatchRepository) -> Self {
        info!("Creating HistoryService");
        Self { repository }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &MatchRepository {
        &self.repository
    }

    /// Assembles a record from the engine's state under `alias` and
    /// persists it. Intended to be called once a match has finished;
    /// an unfinished match is recorded with a NULL winner and no draw
    /// flag.
    #[instrument(skip(self, engine))]
    pub fn record_match(&self, alias: &str, engine: &TurnEngine) -> Result<MatchRecord, DbError> {
        debug!(alias = %alias, winner = ?engine.winner(), "Recording match");
        let record = NewMatchRecord::from_engine(alias, engine);
        let saved = self.repository.save(record)?;
        info!(match_id = saved.id(), "Match recorded");
        Ok(saved)
    }

    /// All persisted matches, newest first.
    #[instrument(skip(self))]
    pub fn history(&self) -> Result<Vec<MatchRecord>, DbError> {
        self.repository.query_all()
    }

    /// One persisted match by id, if present.
    #[instrument(skip(self))]
    pub fn match_by_id(&self, id: i32) -> Result<Option<MatchRecord>, DbError> {
        self.repository.query_by_id(id)
    }
}
