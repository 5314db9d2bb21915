//! Database repository for match history.

use diesel::prelude::*;
use tracing::{debug, info, instrument};

use crate::db::{DbError, MatchRecord, NewMatchRecord, schema};

/// Repository over the match history table.
///
/// Holds only the database path and opens a fresh connection per
/// operation.
#[derive(Debug, Clone)]
pub struct MatchRepository {
    db_path: String,
}

impl MatchRepository {
    /// Creates a repository connected to the database at the given
    /// path. Use `":memory:"` for an in-memory database.
    #[instrument(skip(db_path), fields(db_path = %db_path))]
    pub fn new(db_path: String) -> Self {
        info!(path = %db_path, "Creating MatchRepository");
        Self { db_path }
    }

    fn connection(&self) -> Result<SqliteConnection, DbError> {
        debug!(path = %self.db_path, "Establishing connection");
        SqliteConnection::establish(&self.db_path)
            .map_err(|e| DbError::new(format!("Failed to connect to '{}': {}", self.db_path, e)))
    }

    /// Persists a finished match.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self, record), fields(alias = %record.alias(), is_draw = record.is_draw()))]
    pub fn save(&self, record: NewMatchRecord) -> Result<MatchRecord, DbError> {
        debug!("Saving match record");
        let mut conn = self.connection()?;

        let saved = diesel::insert_into(schema::matches::table)
            .values(&record)
            .returning(MatchRecord::as_returning())
            .get_result(&mut conn)?;

        info!(match_id = saved.id(), winner = ?saved.winner(), "Match saved");
        Ok(saved)
    }

    /// Lists all persisted matches, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn query_all(&self) -> Result<Vec<MatchRecord>, DbError> {
        debug!("Loading match history");
        let mut conn = self.connection()?;

        let records = schema::matches::table
            .order((
                schema::matches::created_at.desc(),
                schema::matches::id.desc(),
            ))
            .load::<MatchRecord>(&mut conn)?;

        info!(count = records.len(), "Match history loaded");
        Ok(records)
    }

    /// Looks up a single match by id. Returns `None` if not found.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if a database error occurs.
    #[instrument(skip(self))]
    pub fn query_by_id(&self, id: i32) -> Result<Option<MatchRecord>, DbError> {
        debug!(id, "Looking up match by id");
        let mut conn = self.connection()?;

        let record = schema::matches::table
            .find(id)
            .first::<MatchRecord>(&mut conn)
            .optional()?;

        if record.is_none() {
            debug!(id, "Match not found");
        }
        Ok(record)
    }
}
