//! Transactional write operations over employees and assignments.
//!
//! # Responsibility
//! - Run guarded multi-statement updates (check -> primary update ->
//!   dependent update) as one atomic unit.
//! - Classify failures as not-found, invalid-state or store failures.
//!
//! # Invariants
//! - Each operation owns at most one transaction; it is committed on the
//!   success path and rolled back (on drop) on every other path.
//! - Preconditions are read inside the same transaction that mutates.
//! - Employee status never moves back to `Active` here.
//!
//! # Known limitation
//! - Check-then-act sequences rely on SQLite's `IMMEDIATE` write lock.
//!   Writers using other connections without that lock may still interleave
//!   between read and write.

use crate::model::assignment::Assignment;
use crate::model::employee::{EmployeeId, EmployeeStatus};
use crate::model::project::ProjectId;
use crate::repo::assignment_repo::{
    call_assign_procedure, deactivate_employee_assignments, load_assignment,
};
use crate::repo::employee_repo::{
    delete_employee, employee_exists, load_name_and_status, mark_employee_inactive,
};
use crate::repo::schema::{
    ensure_connection_ready, ASSIGNMENT_COLUMNS, EMPLOYEE_COLUMNS, PROJECT_COLUMNS,
};
use crate::repo::{RepoError, RepoResult};
use log::{error, info, warn};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Operation names carried in failures and log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOperation {
    AssignEmployeeToProject,
    DeactivateEmployee,
    DeleteInactiveEmployee,
    CheckEmployeeExists,
}

impl UpdateOperation {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::AssignEmployeeToProject => "assign_employee_to_project",
            Self::DeactivateEmployee => "deactivate_employee",
            Self::DeleteInactiveEmployee => "delete_inactive_employee",
            Self::CheckEmployeeExists => "check_employee_exists",
        }
    }
}

impl Display for UpdateOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coarse failure class callers branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Referenced employee/project does not exist.
    NotFound,
    /// Entity state violates the operation's precondition.
    InvalidState,
    /// The store rejected a statement or the connection failed.
    StoreFailure,
}

/// Failure of one transactional operation.
#[derive(Debug)]
pub enum RecordUpdateError {
    /// Employee does not exist; nothing was written.
    NotFound {
        operation: UpdateOperation,
        employee_id: EmployeeId,
    },
    /// Employee exists but its state forbids the operation; nothing was
    /// written.
    InvalidState {
        operation: UpdateOperation,
        employee_id: EmployeeId,
        details: String,
    },
    /// A statement matched nothing although an earlier read in the same unit
    /// said it would. The unit was rolled back.
    Inconsistent {
        operation: UpdateOperation,
        employee_id: EmployeeId,
        details: &'static str,
    },
    /// Engine-level failure; any in-flight unit was rolled back.
    Store {
        operation: UpdateOperation,
        employee_id: EmployeeId,
        project_id: Option<ProjectId>,
        source: RepoError,
    },
}

impl RecordUpdateError {
    pub fn kind(&self) -> FailureKind {
        match self {
            Self::NotFound { .. } => FailureKind::NotFound,
            Self::InvalidState { .. } => FailureKind::InvalidState,
            Self::Inconsistent { .. } | Self::Store { .. } => FailureKind::StoreFailure,
        }
    }

    pub fn operation(&self) -> UpdateOperation {
        match self {
            Self::NotFound { operation, .. }
            | Self::InvalidState { operation, .. }
            | Self::Inconsistent { operation, .. }
            | Self::Store { operation, .. } => *operation,
        }
    }

    pub fn employee_id(&self) -> EmployeeId {
        match self {
            Self::NotFound { employee_id, .. }
            | Self::InvalidState { employee_id, .. }
            | Self::Inconsistent { employee_id, .. }
            | Self::Store { employee_id, .. } => *employee_id,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "employee_not_found",
            Self::InvalidState { .. } => "invalid_state",
            Self::Inconsistent { .. } => "inconsistent_state",
            Self::Store {
                source: RepoError::ProcedureRejected(_),
                ..
            } => "procedure_rejected",
            Self::Store { .. } => "store_failure",
        }
    }
}

impl Display for RecordUpdateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound {
                operation,
                employee_id,
            } => write!(f, "{operation}: employee {employee_id} does not exist"),
            Self::InvalidState {
                operation,
                employee_id,
                details,
            } => write!(f, "{operation}: employee {employee_id}: {details}"),
            Self::Inconsistent {
                operation,
                employee_id,
                details,
            } => write!(
                f,
                "{operation}: employee {employee_id}: inconsistent state: {details}"
            ),
            Self::Store {
                operation,
                employee_id,
                project_id: Some(project_id),
                source,
            } => write!(
                f,
                "{operation}: employee {employee_id}, project {project_id}: {source}"
            ),
            Self::Store {
                operation,
                employee_id,
                project_id: None,
                source,
            } => write!(f, "{operation}: employee {employee_id}: {source}"),
        }
    }
}

impl Error for RecordUpdateError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type RecordUpdateResult<T> = Result<T, RecordUpdateError>;

/// Result of a successful deactivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeactivationOutcome {
    pub employee_id: EmployeeId,
    /// Active assignments flipped to inactive in the same unit.
    pub assignments_deactivated: usize,
}

/// Identity of a removed employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeletedEmployee {
    pub employee_id: EmployeeId,
    pub full_name: String,
}

/// Guarded, atomic state changes for employees and their assignments.
pub struct TransactionalRecordUpdater<'conn> {
    conn: &'conn Connection,
}

impl<'conn> TransactionalRecordUpdater<'conn> {
    /// Creates the updater from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            &[EMPLOYEE_COLUMNS, PROJECT_COLUMNS, ASSIGNMENT_COLUMNS],
        )?;
        Ok(Self { conn })
    }

    /// Returns whether an employee with this id exists. Read-only.
    pub fn check_employee_exists(&self, employee_id: EmployeeId) -> RecordUpdateResult<bool> {
        employee_exists(self.conn, employee_id).map_err(|source| RecordUpdateError::Store {
            operation: UpdateOperation::CheckEmployeeExists,
            employee_id,
            project_id: None,
            source,
        })
    }

    /// Assigns one employee to one project through the stored procedure and
    /// returns the created row.
    ///
    /// Business rules (existence, active status, duplicates, capacity) are
    /// enforced by the procedure; any rejection is a `StoreFailure`.
    pub fn assign_employee_to_project(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> RecordUpdateResult<Assignment> {
        let operation = UpdateOperation::AssignEmployeeToProject;
        let started_at = Instant::now();
        let store = |source: RepoError| RecordUpdateError::Store {
            operation,
            employee_id,
            project_id: Some(project_id),
            source,
        };

        let result = call_assign_procedure(self.conn, employee_id, project_id)
            .and_then(|()| load_assignment(self.conn, employee_id, project_id))
            .map_err(store)
            .and_then(|assignment| {
                assignment.ok_or(RecordUpdateError::Inconsistent {
                    operation,
                    employee_id,
                    details: "assignment missing after procedure call",
                })
            });

        match &result {
            Ok(_) => info!(
                "event={} module=service status=ok employee_id={} project_id={} duration_ms={}",
                operation,
                employee_id,
                project_id,
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure(err, started_at),
        }
        result
    }

    /// Marks one employee `Inactive` and deactivates all of their active
    /// assignments in one atomic unit.
    pub fn deactivate_employee(
        &self,
        employee_id: EmployeeId,
    ) -> RecordUpdateResult<DeactivationOutcome> {
        let operation = UpdateOperation::DeactivateEmployee;
        let started_at = Instant::now();
        let result = self.run_deactivate(employee_id);

        match &result {
            Ok(outcome) => info!(
                "event={} module=service status=ok employee_id={} assignments_deactivated={} duration_ms={}",
                operation,
                employee_id,
                outcome.assignments_deactivated,
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure(err, started_at),
        }
        result
    }

    /// Permanently removes one `Inactive` employee. Assignments are removed by
    /// the schema's cascade.
    pub fn delete_inactive_employee(
        &self,
        employee_id: EmployeeId,
    ) -> RecordUpdateResult<DeletedEmployee> {
        let operation = UpdateOperation::DeleteInactiveEmployee;
        let started_at = Instant::now();
        let result = self.run_delete_inactive(employee_id);

        match &result {
            Ok(deleted) => info!(
                "event={} module=service status=ok employee_id={} duration_ms={}",
                operation,
                deleted.employee_id,
                started_at.elapsed().as_millis()
            ),
            Err(err) => log_failure(err, started_at),
        }
        result
    }

    fn run_deactivate(&self, employee_id: EmployeeId) -> RecordUpdateResult<DeactivationOutcome> {
        let operation = UpdateOperation::DeactivateEmployee;
        let store = |source: RepoError| RecordUpdateError::Store {
            operation,
            employee_id,
            project_id: None,
            source,
        };

        let tx = self.begin().map_err(store)?;

        if !employee_exists(&tx, employee_id).map_err(store)? {
            return Err(RecordUpdateError::NotFound {
                operation,
                employee_id,
            });
        }

        if mark_employee_inactive(&tx, employee_id).map_err(store)? == 0 {
            return Err(RecordUpdateError::Inconsistent {
                operation,
                employee_id,
                details: "status update matched no rows after existence check",
            });
        }

        let assignments_deactivated =
            deactivate_employee_assignments(&tx, employee_id).map_err(store)?;

        tx.commit().map_err(|err| store(err.into()))?;
        Ok(DeactivationOutcome {
            employee_id,
            assignments_deactivated,
        })
    }

    fn run_delete_inactive(&self, employee_id: EmployeeId) -> RecordUpdateResult<DeletedEmployee> {
        let operation = UpdateOperation::DeleteInactiveEmployee;
        let store = |source: RepoError| RecordUpdateError::Store {
            operation,
            employee_id,
            project_id: None,
            source,
        };

        let tx = self.begin().map_err(store)?;

        let (full_name, status) = match load_name_and_status(&tx, employee_id).map_err(store)? {
            Some(found) => found,
            None => {
                return Err(RecordUpdateError::NotFound {
                    operation,
                    employee_id,
                })
            }
        };

        if status == EmployeeStatus::Active {
            return Err(RecordUpdateError::InvalidState {
                operation,
                employee_id,
                details: format!("cannot delete active employee '{full_name}'; deactivate first"),
            });
        }

        if delete_employee(&tx, employee_id).map_err(store)? == 0 {
            return Err(RecordUpdateError::Inconsistent {
                operation,
                employee_id,
                details: "delete matched no rows after status check",
            });
        }

        tx.commit().map_err(|err| store(err.into()))?;
        Ok(DeletedEmployee {
            employee_id,
            full_name,
        })
    }

    fn begin(&self) -> RepoResult<Transaction<'conn>> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        Ok(tx)
    }
}

fn log_failure(err: &RecordUpdateError, started_at: Instant) {
    match err.kind() {
        FailureKind::NotFound | FailureKind::InvalidState => warn!(
            "event={} module=service status=rejected employee_id={} duration_ms={} error_code={} error={}",
            err.operation(),
            err.employee_id(),
            started_at.elapsed().as_millis(),
            err.error_code(),
            err
        ),
        FailureKind::StoreFailure => error!(
            "event={} module=service status=error employee_id={} duration_ms={} error_code={} error={}",
            err.operation(),
            err.employee_id(),
            started_at.elapsed().as_millis(),
            err.error_code(),
            err
        ),
    }
}
