//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Own transaction boundaries for multi-statement writes.

pub mod record_updater;
pub mod roster_service;
pub mod seed_service;
