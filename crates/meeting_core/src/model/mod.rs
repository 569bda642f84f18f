//! Domain model for tracked meetings.
//!
//! # Responsibility
//! - Define the canonical meeting record and its insert request.
//! - Own field-format validation shared by every write path.
//!
//! # Invariants
//! - Every persisted meeting is identified by a store-assigned `MeetingId`.
//! - Meetings are append-only; no update or delete exists.

pub mod format;
pub mod meeting;
