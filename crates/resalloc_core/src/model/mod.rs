//! Domain model for the allocation store.
//!
//! # Responsibility
//! - Define the records persisted in `employees`, `projects` and
//!   `employee_projects`.
//! - Validate insert payloads before they reach SQL.
//!
//! # Invariants
//! - Identifiers are assigned by the store and never reused.
//! - Employee status only moves `Active -> Inactive`; removal is a hard delete.

pub mod assignment;
pub mod employee;
pub mod project;
pub mod validation;
