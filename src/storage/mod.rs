//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with tables:
//! - expenses(id, username, date, category, amount, description)
//! - user_settings(username, budget)

pub mod schema;
pub mod sqlite;

pub use sqlite::{DbStats, SqliteStore};
