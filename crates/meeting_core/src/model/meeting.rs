//! Meeting domain model.
//!
//! # Responsibility
//! - Define the persisted meeting record and the insert request.
//! - Validate insert requests before they reach storage.
//!
//! # Invariants
//! - `date`, `time` and `topics` are never empty for a persisted meeting.
//! - `referrals` is never null; absence is the empty string.

use crate::model::format::{validate_date, validate_time, DATE_FORMAT, TIME_FORMAT};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned identifier, monotonic and stable for the row lifetime.
pub type MeetingId = i64;

/// Persisted meeting row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meeting {
    pub id: MeetingId,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// 24-hour `HH:MM`.
    pub time: String,
    pub topics: String,
    /// Empty when no referral was recorded.
    pub referrals: String,
}

/// Insert request for a meeting that has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewMeeting {
    pub date: String,
    pub time: String,
    pub topics: String,
    pub referrals: String,
}

impl NewMeeting {
    /// Creates a request without referrals.
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        topics: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            topics: topics.into(),
            referrals: String::new(),
        }
    }

    /// Sets the referrals text.
    pub fn with_referrals(mut self, referrals: impl Into<String>) -> Self {
        self.referrals = referrals.into();
        self
    }

    /// Checks required fields first, then date and time format.
    ///
    /// # Errors
    /// - `MissingRequiredFields` when date, time or topics is empty.
    /// - `InvalidDate` / `InvalidTime` carrying the offending value.
    pub fn validate(&self) -> Result<(), MeetingValidationError> {
        if self.date.is_empty() || self.time.is_empty() || self.topics.is_empty() {
            return Err(MeetingValidationError::MissingRequiredFields);
        }
        if !validate_date(&self.date) {
            return Err(MeetingValidationError::InvalidDate(self.date.clone()));
        }
        if !validate_time(&self.time) {
            return Err(MeetingValidationError::InvalidTime(self.time.clone()));
        }
        Ok(())
    }
}

/// Input rejected before any storage access.
///
/// `Display` output is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MeetingValidationError {
    MissingRequiredFields,
    InvalidDate(String),
    InvalidTime(String),
}

impl Display for MeetingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingRequiredFields => {
                write!(f, "Invalid input: date, time, and topics are required.")
            }
            Self::InvalidDate(value) => write!(
                f,
                "Invalid date format: {value}. Expected format: {DATE_FORMAT}."
            ),
            Self::InvalidTime(value) => write!(
                f,
                "Invalid time format: {value}. Expected format: {TIME_FORMAT}."
            ),
        }
    }
}

impl Error for MeetingValidationError {}
