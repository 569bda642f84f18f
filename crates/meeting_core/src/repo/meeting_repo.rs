//! Meeting repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide append, list and keyword search over `meetings` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths call `NewMeeting::validate()` before SQL mutations.
//! - Read paths return rows in insertion (`id`) order.
//! - A NULL `referrals` column reads back as the empty string.

use crate::db::DbError;
use crate::model::meeting::{Meeting, MeetingId, MeetingValidationError, NewMeeting};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const MEETING_SELECT_SQL: &str = "SELECT
    id,
    date,
    time,
    topics,
    referrals
FROM meetings";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for meeting persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(MeetingValidationError),
    Db(DbError),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
        }
    }
}

impl From<MeetingValidationError> for RepoError {
    fn from(value: MeetingValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for meeting storage.
pub trait MeetingRepository {
    fn add(&self, meeting: &NewMeeting) -> RepoResult<MeetingId>;
    fn list_all(&self) -> RepoResult<Vec<Meeting>>;
    /// Case-sensitive substring match over `topics` OR `referrals`.
    ///
    /// An empty keyword matches every row.
    fn search(&self, keyword: &str) -> RepoResult<Vec<Meeting>>;
}

/// SQLite-backed meeting repository over a borrowed connection.
pub struct SqliteMeetingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteMeetingRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl MeetingRepository for SqliteMeetingRepository<'_> {
    fn add(&self, meeting: &NewMeeting) -> RepoResult<MeetingId> {
        meeting.validate()?;

        self.conn.execute(
            "INSERT INTO meetings (
                date,
                time,
                topics,
                referrals
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                meeting.date.as_str(),
                meeting.time.as_str(),
                meeting.topics.as_str(),
                meeting.referrals.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_all(&self) -> RepoResult<Vec<Meeting>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{MEETING_SELECT_SQL} ORDER BY id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut meetings = Vec::new();

        while let Some(row) = rows.next()? {
            meetings.push(parse_meeting_row(row)?);
        }

        Ok(meetings)
    }

    fn search(&self, keyword: &str) -> RepoResult<Vec<Meeting>> {
        // instr() keeps the match literal and case-sensitive, unlike LIKE.
        let mut stmt = self.conn.prepare(&format!(
            "{MEETING_SELECT_SQL}
             WHERE instr(topics, ?1) > 0
                OR instr(COALESCE(referrals, ''), ?1) > 0
             ORDER BY id ASC;"
        ))?;
        let mut rows = stmt.query(params![keyword])?;
        let mut meetings = Vec::new();

        while let Some(row) = rows.next()? {
            meetings.push(parse_meeting_row(row)?);
        }

        Ok(meetings)
    }
}

fn parse_meeting_row(row: &Row<'_>) -> RepoResult<Meeting> {
    Ok(Meeting {
        id: row.get("id")?,
        date: row.get("date")?,
        time: row.get("time")?,
        topics: row.get("topics")?,
        referrals: row
            .get::<_, Option<String>>("referrals")?
            .unwrap_or_default(),
    })
}
