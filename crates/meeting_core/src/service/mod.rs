//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate connection lifecycle and repository calls.
//! - Keep front ends decoupled from storage details.

pub mod meeting_service;
