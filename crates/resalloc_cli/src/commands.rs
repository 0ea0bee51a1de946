//! Single-operation command handlers.
//!
//! Each handler prints its own outcome and returns whether the operation
//! succeeded; setup failures (store open, repository bootstrap) propagate as
//! `anyhow` errors.

use crate::render;
use anyhow::{Context, Result};
use resalloc_core::{
    seed_sample_data, EmployeeId, EmployeeRepository, ProjectId, ProjectRepository,
    RosterService, SqliteAssignmentRepository, SqliteEmployeeRepository, SqliteProjectRepository,
    TransactionalRecordUpdater,
};
use rusqlite::Connection;

pub fn seed(conn: &Connection) -> Result<bool> {
    let summary = seed_sample_data(conn)?;
    render::seeded(&summary);
    Ok(true)
}

pub fn assign(conn: &Connection, employee_id: EmployeeId, project_id: ProjectId) -> Result<bool> {
    let updater = updater(conn)?;
    match updater.assign_employee_to_project(employee_id, project_id) {
        Ok(_) => {
            render::success(&format!(
                "Employee {employee_id} assigned to Project {project_id}"
            ));
            Ok(true)
        }
        Err(err) => {
            render::update_failure(&err);
            Ok(false)
        }
    }
}

pub fn deactivate(conn: &Connection, employee_id: EmployeeId) -> Result<bool> {
    let updater = updater(conn)?;
    match updater.deactivate_employee(employee_id) {
        Ok(outcome) => {
            render::success(&format!("Employee with ID {employee_id} deactivated"));
            render::detail(&format!(
                "{} active project assignment(s) deactivated",
                outcome.assignments_deactivated
            ));
            Ok(true)
        }
        Err(err) => {
            render::update_failure(&err);
            Ok(false)
        }
    }
}

pub fn delete(conn: &Connection, employee_id: EmployeeId) -> Result<bool> {
    let updater = updater(conn)?;
    match updater.delete_inactive_employee(employee_id) {
        Ok(deleted) => {
            render::success(&format!(
                "Inactive employee '{}' (ID:{}) deleted",
                deleted.full_name, deleted.employee_id
            ));
            Ok(true)
        }
        Err(err) => {
            render::update_failure(&err);
            Ok(false)
        }
    }
}

pub fn exists(conn: &Connection, employee_id: EmployeeId) -> Result<bool> {
    let updater = updater(conn)?;
    match updater.check_employee_exists(employee_id) {
        Ok(found) => {
            println!("{found}");
            Ok(found)
        }
        Err(err) => {
            render::update_failure(&err);
            Ok(false)
        }
    }
}

pub fn list(conn: &Connection, json: bool) -> Result<bool> {
    let repo = SqliteAssignmentRepository::try_new(conn)
        .context("assignment repository bootstrap failed")?;
    let roster = RosterService::new(repo);
    match roster.active_assignments() {
        Ok(report) if json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(true)
        }
        Ok(report) => {
            render::active_assignments(&report);
            Ok(true)
        }
        Err(err) => {
            render::repo_failure(&err);
            Ok(false)
        }
    }
}

pub fn employees(conn: &Connection, json: bool) -> Result<bool> {
    let repo = SqliteEmployeeRepository::try_new(conn)
        .context("employee repository bootstrap failed")?;
    let employees = repo.list_employees()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&employees)?);
    } else {
        render::employees(&employees);
    }
    Ok(true)
}

pub fn projects(conn: &Connection, json: bool) -> Result<bool> {
    let repo = SqliteProjectRepository::try_new(conn)
        .context("project repository bootstrap failed")?;
    let projects = repo.list_projects()?;
    if json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else {
        render::projects(&projects);
    }
    Ok(true)
}

fn updater(conn: &Connection) -> Result<TransactionalRecordUpdater<'_>> {
    TransactionalRecordUpdater::try_new(conn).context("record updater bootstrap failed")
}
