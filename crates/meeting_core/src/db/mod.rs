//! SQLite storage bootstrap and schema entry points.
//!
//! # Responsibility
//! - Open and configure SQLite connections for meeting storage.
//! - Ensure the `meetings` table exists before data access.
//!
//! # Invariants
//! - One connection per operation; it is dropped on every exit path.
//! - Open and initialize failures are logged and returned, never swallowed.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

mod open;
pub mod schema;
mod store;

pub use open::{open_db, open_db_in_memory};
pub use store::MeetingStore;

pub type DbResult<T> = Result<T, DbError>;

/// Store could not be opened or initialized, or a statement failed.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::CreateDir { path, source } => write!(
                f,
                "failed to create database directory `{}`: {source}",
                path.display()
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::CreateDir { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
