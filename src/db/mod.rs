//! Match history persistence.
//!
//! The engine only produces plain record values; everything sqlite
//! lives behind this module.

mod error;
mod models;
mod repository;
mod schema;

pub use error::DbError;
pub use models::{MatchRecord, NewMatchRecord};
pub use repository::MatchRepository;
