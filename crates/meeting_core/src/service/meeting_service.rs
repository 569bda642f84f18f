//! Meeting use-case service.
//!
//! # Responsibility
//! - Expose the three calls front ends depend on: add, list, search.
//! - Acquire one connection per call and release it on every exit path.
//! - Emit one log line per call outcome.
//!
//! # Invariants
//! - `add` never returns `Err`; validation and storage failures become an
//!   unsuccessful [`AddOutcome`] with a displayable message.
//! - `list_all` and `search` propagate storage failures.

use crate::config::AppConfig;
use crate::db::{DbResult, MeetingStore};
use crate::model::meeting::{Meeting, MeetingId, NewMeeting};
use crate::repo::meeting_repo::{
    MeetingRepository, RepoError, RepoResult, SqliteMeetingRepository,
};
use log::{error, info, warn};

/// Message returned for a persisted meeting.
pub const ADD_SUCCESS_MESSAGE: &str = "Meeting added successfully!";

/// Result of [`MeetingService::add`], rendered directly by front ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddOutcome {
    pub success: bool,
    pub message: String,
    /// Assigned id when `success` is true.
    pub id: Option<MeetingId>,
}

impl AddOutcome {
    fn added(id: MeetingId) -> Self {
        Self {
            success: true,
            message: ADD_SUCCESS_MESSAGE.to_string(),
            id: Some(id),
        }
    }

    fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }
}

/// Stateless facade over the configured meeting store.
#[derive(Debug, Clone)]
pub struct MeetingService {
    store: MeetingStore,
}

impl MeetingService {
    /// Builds the service from startup configuration and ensures the schema.
    ///
    /// # Errors
    /// Returns the store error when the file cannot be opened or the table
    /// cannot be created.
    pub fn open(config: &AppConfig) -> DbResult<Self> {
        Self::with_store(MeetingStore::new(config.database.db_path.clone()))
    }

    /// Builds the service over an explicit store and ensures the schema.
    pub fn with_store(store: MeetingStore) -> DbResult<Self> {
        store.initialize()?;
        Ok(Self { store })
    }

    pub fn store(&self) -> &MeetingStore {
        &self.store
    }

    /// Validates and appends one meeting.
    ///
    /// A store that cannot be opened is reported the same way as a failed
    /// insert (`success == false`, `Failed to add meeting: ...`) rather than
    /// returned as a `DbError`, so callers need a single display path.
    /// `list_all` and `search` still return the error.
    pub fn add(&self, date: &str, time: &str, topics: &str, referrals: &str) -> AddOutcome {
        let meeting = NewMeeting::new(date, time, topics).with_referrals(referrals);
        if let Err(err) = meeting.validate() {
            warn!("event=meeting_add module=service status=rejected reason={err:?}");
            return AddOutcome::rejected(err.to_string());
        }

        match self.insert(&meeting) {
            Ok(id) => {
                info!(
                    "event=meeting_add module=service status=ok id={} date={} time={}",
                    id, meeting.date, meeting.time
                );
                AddOutcome::added(id)
            }
            Err(err) => {
                error!("event=meeting_add module=service status=error error={err}");
                AddOutcome::rejected(format!("Failed to add meeting: {err}"))
            }
        }
    }

    /// Returns every meeting in insertion order.
    pub fn list_all(&self) -> RepoResult<Vec<Meeting>> {
        let result = self.with_repo(|repo| repo.list_all());
        match &result {
            Ok(meetings) => info!(
                "event=meeting_list module=service status=ok count={}",
                meetings.len()
            ),
            Err(err) => error!("event=meeting_list module=service status=error error={err}"),
        }
        result
    }

    /// Returns meetings whose topics or referrals contain `keyword`.
    ///
    /// Blank keywords are not rejected here; front ends decide.
    pub fn search(&self, keyword: &str) -> RepoResult<Vec<Meeting>> {
        let result = self.with_repo(|repo| repo.search(keyword));
        match &result {
            Ok(meetings) => info!(
                "event=meeting_search module=service status=ok count={} keyword_len={}",
                meetings.len(),
                keyword.chars().count()
            ),
            Err(err) => error!("event=meeting_search module=service status=error error={err}"),
        }
        result
    }

    fn insert(&self, meeting: &NewMeeting) -> RepoResult<MeetingId> {
        self.with_repo(|repo| repo.add(meeting))
    }

    fn with_repo<T>(
        &self,
        op: impl FnOnce(&SqliteMeetingRepository<'_>) -> RepoResult<T>,
    ) -> RepoResult<T> {
        let conn = self.store.connect().map_err(RepoError::from)?;
        let repo = SqliteMeetingRepository::new(&conn);
        op(&repo)
    }
}
