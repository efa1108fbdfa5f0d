//! Storage layer: `SQLite` schema and issue persistence.

pub mod schema;
pub mod sqlite;

pub use sqlite::{SqliteStorage, StatusMonthCount};
