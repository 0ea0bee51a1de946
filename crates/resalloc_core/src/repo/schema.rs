//! Connection readiness checks and roster-wide maintenance statements.

use super::{RepoError, RepoResult};
use crate::db::migrations::{current_user_version, latest_version};
use rusqlite::Connection;

/// Tables (and the columns each repository reads) of the allocation schema.
pub(crate) const EMPLOYEE_COLUMNS: (&str, &[&str]) = (
    "employees",
    &["employee_id", "full_name", "email", "status"],
);
pub(crate) const PROJECT_COLUMNS: (&str, &[&str]) = (
    "projects",
    &["project_id", "project_name", "start_date", "end_date"],
);
pub(crate) const ASSIGNMENT_COLUMNS: (&str, &[&str]) = (
    "employee_projects",
    &["employee_id", "project_id", "assigned_on", "is_active"],
);

/// Verifies that `conn` is migrated and exposes the given tables/columns.
pub(crate) fn ensure_connection_ready(
    conn: &Connection,
    tables: &[(&'static str, &'static [&'static str])],
) -> RepoResult<()> {
    let actual_version = current_user_version(conn)?;
    let expected_version = latest_version();
    if actual_version != expected_version {
        return Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    for &(table, columns) in tables {
        if !table_exists(conn, table)? {
            return Err(RepoError::MissingRequiredTable(table));
        }
        for &column in columns {
            if !table_has_column(conn, table, column)? {
                return Err(RepoError::MissingRequiredColumn { table, column });
            }
        }
    }

    Ok(())
}

/// Removes every assignment, project and employee row and resets the id
/// sequences. Runs on whatever transaction `conn` belongs to.
pub fn reset_roster(conn: &Connection) -> RepoResult<()> {
    conn.execute("DELETE FROM employee_projects;", [])?;
    conn.execute("DELETE FROM projects;", [])?;
    conn.execute("DELETE FROM employees;", [])?;
    conn.execute(
        "DELETE FROM sqlite_sequence WHERE name IN ('employees', 'projects');",
        [],
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> RepoResult<bool> {
    let mut stmt = conn.prepare("SELECT name FROM pragma_table_info(?1);")?;
    let mut rows = stmt.query([table])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(0)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
