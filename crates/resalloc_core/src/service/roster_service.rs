//! Read-side roster queries.
//!
//! # Responsibility
//! - Provide the active-assignment report shown after each demo step.
//! - Keep callers decoupled from repository details.

use crate::model::assignment::{ActiveAssignment, Assignment};
use crate::model::employee::EmployeeId;
use crate::repo::assignment_repo::AssignmentRepository;
use crate::repo::RepoResult;
use serde::Serialize;

/// Active assignments plus their count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActiveAssignmentReport {
    /// Sorted by employee name, then project name.
    pub rows: Vec<ActiveAssignment>,
    pub total: usize,
}

impl ActiveAssignmentReport {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Use-case wrapper over assignment reads.
pub struct RosterService<R: AssignmentRepository> {
    repo: R,
}

impl<R: AssignmentRepository> RosterService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Loads every active assignment with employee/project names.
    pub fn active_assignments(&self) -> RepoResult<ActiveAssignmentReport> {
        let rows = self.repo.list_active()?;
        let total = rows.len();
        Ok(ActiveAssignmentReport { rows, total })
    }

    /// Loads all assignments (active or not) of one employee.
    pub fn assignments_for(&self, employee_id: EmployeeId) -> RepoResult<Vec<Assignment>> {
        self.repo.list_for_employee(employee_id)
    }
}
