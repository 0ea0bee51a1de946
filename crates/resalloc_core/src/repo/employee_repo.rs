//! Employee repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide CRUD APIs over the `employees` table.
//! - Expose connection-level helpers that transactional services compose
//!   inside their own atomic unit.
//!
//! # Invariants
//! - Inserts call `NewEmployee::validate()` before SQL mutations.
//! - Read paths reject unknown status values instead of masking them.

use super::schema::{ensure_connection_ready, EMPLOYEE_COLUMNS};
use super::{RepoError, RepoResult};
use crate::model::employee::{Employee, EmployeeId, EmployeeStatus, NewEmployee};
use rusqlite::{params, Connection, OptionalExtension, Row};

const EMPLOYEE_SELECT_SQL: &str = "SELECT
    employee_id,
    full_name,
    email,
    status
FROM employees";

/// Repository interface for employee operations.
pub trait EmployeeRepository {
    /// Inserts one employee and returns the store-assigned id.
    fn create_employee(&self, employee: &NewEmployee) -> RepoResult<EmployeeId>;
    /// Loads one employee by id.
    fn get_employee(&self, employee_id: EmployeeId) -> RepoResult<Option<Employee>>;
    /// Lists all employees ordered by id.
    fn list_employees(&self) -> RepoResult<Vec<Employee>>;
    /// Returns whether an employee row with this id exists.
    fn employee_exists(&self, employee_id: EmployeeId) -> RepoResult<bool>;
}

/// SQLite-backed employee repository.
pub struct SqliteEmployeeRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEmployeeRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[EMPLOYEE_COLUMNS])?;
        Ok(Self { conn })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository<'_> {
    fn create_employee(&self, employee: &NewEmployee) -> RepoResult<EmployeeId> {
        insert_employee(self.conn, employee)
    }

    fn get_employee(&self, employee_id: EmployeeId) -> RepoResult<Option<Employee>> {
        load_employee(self.conn, employee_id)
    }

    fn list_employees(&self) -> RepoResult<Vec<Employee>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{EMPLOYEE_SELECT_SQL} ORDER BY employee_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut employees = Vec::new();
        while let Some(row) = rows.next()? {
            employees.push(parse_employee_row(row)?);
        }
        Ok(employees)
    }

    fn employee_exists(&self, employee_id: EmployeeId) -> RepoResult<bool> {
        employee_exists(self.conn, employee_id)
    }
}

/// Inserts one validated employee on `conn`.
pub fn insert_employee(conn: &Connection, employee: &NewEmployee) -> RepoResult<EmployeeId> {
    employee.validate()?;

    conn.execute(
        "INSERT INTO employees (full_name, email, status) VALUES (?1, ?2, ?3);",
        params![
            employee.full_name.trim(),
            employee.email.trim(),
            employee.status.as_db_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Pure existence read. Opens no transaction of its own, so it observes the
/// caller's uncommitted writes when `conn` is a transaction.
pub fn employee_exists(conn: &Connection, employee_id: EmployeeId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = ?1);",
        [employee_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Loads one employee on `conn`.
pub fn load_employee(conn: &Connection, employee_id: EmployeeId) -> RepoResult<Option<Employee>> {
    let mut stmt = conn.prepare(&format!("{EMPLOYEE_SELECT_SQL} WHERE employee_id = ?1;"))?;
    let mut rows = stmt.query([employee_id])?;
    if let Some(row) = rows.next()? {
        return Ok(Some(parse_employee_row(row)?));
    }
    Ok(None)
}

/// Reads `(full_name, status)` for the delete precondition.
pub fn load_name_and_status(
    conn: &Connection,
    employee_id: EmployeeId,
) -> RepoResult<Option<(String, EmployeeStatus)>> {
    let found = conn
        .query_row(
            "SELECT full_name, status FROM employees WHERE employee_id = ?1;",
            [employee_id],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)),
        )
        .optional()?;

    match found {
        Some((full_name, status_text)) => {
            let status = parse_status(&status_text)?;
            Ok(Some((full_name, status)))
        }
        None => Ok(None),
    }
}

/// Sets `status = 'Inactive'` and returns the number of rows matched.
pub fn mark_employee_inactive(conn: &Connection, employee_id: EmployeeId) -> RepoResult<usize> {
    let changed = conn.execute(
        "UPDATE employees SET status = ?2 WHERE employee_id = ?1;",
        params![employee_id, EmployeeStatus::Inactive.as_db_str()],
    )?;
    Ok(changed)
}

/// Hard-deletes one employee. Assignment rows go with it through
/// `ON DELETE CASCADE`.
pub fn delete_employee(conn: &Connection, employee_id: EmployeeId) -> RepoResult<usize> {
    let changed = conn.execute(
        "DELETE FROM employees WHERE employee_id = ?1;",
        [employee_id],
    )?;
    Ok(changed)
}

fn parse_employee_row(row: &Row<'_>) -> RepoResult<Employee> {
    let status_text: String = row.get("status")?;
    Ok(Employee {
        employee_id: row.get("employee_id")?,
        full_name: row.get("full_name")?,
        email: row.get("email")?,
        status: parse_status(&status_text)?,
    })
}

fn parse_status(value: &str) -> RepoResult<EmployeeStatus> {
    EmployeeStatus::from_db_str(value).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid status `{value}` in employees.status"))
    })
}
