//! Core domain logic for the resource allocation store.
//! This crate is the single source of truth for roster invariants.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{open_db, open_db_in_memory, open_store, DbError, StoreConfig, StoreLocation};
pub use logging::{default_log_dir, default_log_level, init_logging, logging_status, LogLevel};
pub use model::assignment::{ActiveAssignment, Assignment};
pub use model::employee::{Employee, EmployeeId, EmployeeStatus, NewEmployee};
pub use model::project::{NewProject, Project, ProjectId};
pub use model::validation::ValidationError;
pub use repo::assignment_repo::{AssignmentRepository, SqliteAssignmentRepository};
pub use repo::employee_repo::{EmployeeRepository, SqliteEmployeeRepository};
pub use repo::project_repo::{ProjectRepository, SqliteProjectRepository};
pub use repo::{RepoError, RepoResult};
pub use service::record_updater::{
    DeactivationOutcome, DeletedEmployee, FailureKind, RecordUpdateError, RecordUpdateResult,
    TransactionalRecordUpdater, UpdateOperation,
};
pub use service::roster_service::{ActiveAssignmentReport, RosterService};
pub use service::seed_service::{seed_sample_data, SeedError, SeedSummary};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
