//! Assignment repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Invoke the `AssignEmployeeToProject` procedure.
//! - Read and deactivate `employee_projects` rows.
//!
//! # Invariants
//! - Assignments are only created through the procedure, which owns the
//!   existence, status, duplicate and capacity rules.
//! - Procedure rejections surface as `RepoError::ProcedureRejected` with the
//!   engine's message unchanged.

use super::schema::{ensure_connection_ready, ASSIGNMENT_COLUMNS, EMPLOYEE_COLUMNS, PROJECT_COLUMNS};
use super::{int_to_bool, RepoError, RepoResult};
use crate::model::assignment::{ActiveAssignment, Assignment};
use crate::model::employee::{EmployeeId, EmployeeStatus};
use crate::model::project::ProjectId;
use rusqlite::{ffi, params, Connection, Row};

/// Name of the assignment procedure owned by the schema.
pub const ASSIGN_PROCEDURE: &str = "AssignEmployeeToProject";

const ASSIGNMENT_SELECT_SQL: &str = "SELECT
    employee_id,
    project_id,
    assigned_on,
    is_active
FROM employee_projects";

/// Repository interface for assignment operations.
pub trait AssignmentRepository {
    /// Calls `AssignEmployeeToProject(employee_id, project_id)`.
    fn assign(&self, employee_id: EmployeeId, project_id: ProjectId) -> RepoResult<()>;
    /// Loads one assignment row, active or not.
    fn get_assignment(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> RepoResult<Option<Assignment>>;
    /// Lists every assignment of one employee ordered by project id.
    fn list_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<Assignment>>;
    /// Lists active assignments joined with employee/project names.
    fn list_active(&self) -> RepoResult<Vec<ActiveAssignment>>;
}

/// SQLite-backed assignment repository.
pub struct SqliteAssignmentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAssignmentRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(
            conn,
            &[ASSIGNMENT_COLUMNS, EMPLOYEE_COLUMNS, PROJECT_COLUMNS],
        )?;
        Ok(Self { conn })
    }
}

impl AssignmentRepository for SqliteAssignmentRepository<'_> {
    fn assign(&self, employee_id: EmployeeId, project_id: ProjectId) -> RepoResult<()> {
        call_assign_procedure(self.conn, employee_id, project_id)
    }

    fn get_assignment(
        &self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> RepoResult<Option<Assignment>> {
        load_assignment(self.conn, employee_id, project_id)
    }

    fn list_for_employee(&self, employee_id: EmployeeId) -> RepoResult<Vec<Assignment>> {
        let mut stmt = self.conn.prepare(&format!(
            "{ASSIGNMENT_SELECT_SQL}
             WHERE employee_id = ?1
             ORDER BY project_id ASC;"
        ))?;
        let mut rows = stmt.query([employee_id])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_assignment_row(row)?);
        }
        Ok(items)
    }

    fn list_active(&self) -> RepoResult<Vec<ActiveAssignment>> {
        let mut stmt = self.conn.prepare(
            "SELECT
                e.employee_id AS employee_id,
                e.full_name AS full_name,
                e.status AS status,
                p.project_id AS project_id,
                p.project_name AS project_name,
                ep.assigned_on AS assigned_on
             FROM employees e
             INNER JOIN employee_projects ep ON e.employee_id = ep.employee_id
             INNER JOIN projects p ON ep.project_id = p.project_id
             WHERE ep.is_active = 1
             ORDER BY e.full_name ASC, p.project_name ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            let status_text: String = row.get("status")?;
            let status = EmployeeStatus::from_db_str(&status_text).ok_or_else(|| {
                RepoError::InvalidData(format!(
                    "invalid status `{status_text}` in employees.status"
                ))
            })?;
            items.push(ActiveAssignment {
                employee_id: row.get("employee_id")?,
                full_name: row.get("full_name")?,
                status,
                project_id: row.get("project_id")?,
                project_name: row.get("project_name")?,
                assigned_on: row.get("assigned_on")?,
            });
        }
        Ok(items)
    }
}

/// Invokes the assignment procedure as one statement on `conn`.
pub fn call_assign_procedure(
    conn: &Connection,
    employee_id: EmployeeId,
    project_id: ProjectId,
) -> RepoResult<()> {
    conn.execute(
        &format!("INSERT INTO {ASSIGN_PROCEDURE} (employee_id, project_id) VALUES (?1, ?2);"),
        params![employee_id, project_id],
    )
    .map_err(map_procedure_error)?;
    Ok(())
}

/// Clears `is_active` on every active assignment of one employee and returns
/// how many rows flipped.
pub fn deactivate_employee_assignments(
    conn: &Connection,
    employee_id: EmployeeId,
) -> RepoResult<usize> {
    let changed = conn.execute(
        "UPDATE employee_projects
         SET is_active = 0
         WHERE employee_id = ?1
           AND is_active = 1;",
        [employee_id],
    )?;
    Ok(changed)
}

/// Loads one assignment row on `conn`.
pub fn load_assignment(
    conn: &Connection,
    employee_id: EmployeeId,
    project_id: ProjectId,
) -> RepoResult<Option<Assignment>> {
    let mut stmt = conn.prepare(&format!(
        "{ASSIGNMENT_SELECT_SQL}
         WHERE employee_id = ?1
           AND project_id = ?2;"
    ))?;
    let mut rows = stmt.query(params![employee_id, project_id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_assignment_row(row)?));
    }
    Ok(None)
}

fn parse_assignment_row(row: &Row<'_>) -> RepoResult<Assignment> {
    Ok(Assignment {
        employee_id: row.get("employee_id")?,
        project_id: row.get("project_id")?,
        assigned_on: row.get("assigned_on")?,
        is_active: int_to_bool(row.get("is_active")?, "employee_projects.is_active")?,
    })
}

fn map_procedure_error(err: rusqlite::Error) -> RepoError {
    match err {
        rusqlite::Error::SqliteFailure(inner, Some(message))
            if inner.extended_code == ffi::SQLITE_CONSTRAINT_TRIGGER =>
        {
            RepoError::ProcedureRejected(message)
        }
        other => other.into(),
    }
}
