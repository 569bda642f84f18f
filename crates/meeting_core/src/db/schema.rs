//! Meeting table definition.
//!
//! # Invariants
//! - Initialization is idempotent and never touches existing rows.

use super::DbResult;
use rusqlite::Connection;

const CREATE_MEETINGS_SQL: &str = "CREATE TABLE IF NOT EXISTS meetings (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL,
    time TEXT NOT NULL,
    topics TEXT NOT NULL,
    referrals TEXT DEFAULT ''
);";

/// Creates the `meetings` table when it does not exist yet.
pub fn initialize_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(CREATE_MEETINGS_SQL)?;
    Ok(())
}

/// Returns whether the `meetings` table exists on this connection.
pub fn meetings_table_exists(conn: &Connection) -> DbResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = 'meetings'
        );",
        [],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
