//! Core data access for the meeting tracker.
//! This crate is the single source of truth for meeting invariants.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, DatabaseConfig, LoggingConfig};
pub use db::{DbError, DbResult, MeetingStore};
pub use logging::{init_logging, init_logging_from, logging_status};
pub use model::format::{validate_date, validate_time};
pub use model::meeting::{Meeting, MeetingId, MeetingValidationError, NewMeeting};
pub use repo::meeting_repo::{
    MeetingRepository, RepoError, RepoResult, SqliteMeetingRepository,
};
pub use service::meeting_service::{AddOutcome, MeetingService, ADD_SUCCESS_MESSAGE};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
