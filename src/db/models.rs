//! Database models for persisted matches.

use chrono::NaiveDateTime;
use derive_getters::Getters;
use derive_new::new;
use diesel::prelude::*;

use crate::db::schema;
use crate::game::TurnEngine;

/// A persisted match, as read back from the history table.
#[derive(Debug, Clone, Queryable, Identifiable, Selectable, Getters)]
#[diesel(table_name = schema::matches)]
pub struct MatchRecord {
    id: i32,
    alias: String,
    player_count: i32,
    timed: bool,
    winner: Option<String>,
    is_draw: bool,
    log: String,
    created_at: NaiveDateTime,
}

/// Insertable match model, assembled when a match ends.
#[derive(Debug, Clone, Insertable, new, Getters)]
#[diesel(table_name = schema::matches)]
pub struct NewMatchRecord {
    alias: String,
    player_count: i32,
    timed: bool,
    winner: Option<String>,
    is_draw: bool,
    log: String,
}

impl NewMatchRecord {
    /// Assembles a record from an engine's state under the given
    /// player alias.
    ///
    /// The winner column is NULL for drawn and abandoned matches; the
    /// log column carries the full newline-joined match log.
    pub fn from_engine(alias: impl Into<String>, engine: &TurnEngine) -> Self {
        Self::new(
            alias.into(),
            engine.player_count(),
            engine.timed(),
            engine.winner().map(|side| side.to_string()),
            engine.is_draw(),
            engine.log().text(),
        )
    }
}
