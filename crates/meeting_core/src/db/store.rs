//! Configured store location and per-operation connection provider.
//!
//! # Invariants
//! - Holds only the path; no connection outlives a single call.

use super::schema::initialize_schema;
use super::{open_db, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Handle to the SQLite file backing meeting storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingStore {
    db_path: PathBuf,
}

impl MeetingStore {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    pub fn db_path(&self) -> &Path {
        &self.db_path
    }

    /// Opens a fresh connection to the configured file.
    ///
    /// The caller owns the connection; dropping it closes the handle.
    pub fn connect(&self) -> DbResult<Connection> {
        open_db(&self.db_path)
    }

    /// Ensures the `meetings` table exists. Safe to call on every start.
    ///
    /// The connection is closed before any error reaches the caller.
    pub fn initialize(&self) -> DbResult<()> {
        let conn = self.connect()?;
        match initialize_schema(&conn) {
            Ok(()) => {
                info!(
                    "event=schema_init module=db status=ok path={}",
                    self.db_path.display()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=schema_init module=db status=error path={} error={}",
                    self.db_path.display(),
                    err
                );
                Err(err)
            }
        }
    }
}
