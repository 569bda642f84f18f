//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the meeting data access contract.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repository writes must enforce `NewMeeting::validate()` before SQL.
//! - No update or delete path exists.

pub mod meeting_repo;
