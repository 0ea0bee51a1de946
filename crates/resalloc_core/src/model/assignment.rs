//! Employee-to-project assignments.

use super::employee::{EmployeeId, EmployeeStatus};
use super::project::ProjectId;
use serde::{Deserialize, Serialize};

/// Persisted `employee_projects` row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub employee_id: EmployeeId,
    pub project_id: ProjectId,
    /// Unix epoch milliseconds.
    pub assigned_on: i64,
    pub is_active: bool,
}

/// Joined read model for the active-assignment roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveAssignment {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub status: EmployeeStatus,
    pub project_id: ProjectId,
    pub project_name: String,
    /// Unix epoch milliseconds.
    pub assigned_on: i64,
}
