//! Sample roster seeding.
//!
//! # Responsibility
//! - Replace all roster rows with the fixed sample employees and projects.
//!
//! # Invariants
//! - Clearing and inserting happen in one transaction; a failure leaves the
//!   previous roster untouched.
//! - After a successful seed, employee ids are `1..=5` and project ids
//!   `1..=3` in declaration order.

use crate::model::employee::{EmployeeStatus, NewEmployee};
use crate::model::project::NewProject;
use crate::repo::employee_repo::insert_employee;
use crate::repo::project_repo::insert_project;
use crate::repo::schema::reset_roster;
use crate::repo::RepoError;
use chrono::NaiveDate;
use log::{error, info};
use rusqlite::{Connection, Transaction, TransactionBehavior};
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

type Ymd = (i32, u32, u32);

const SAMPLE_EMPLOYEES: &[(&str, &str, EmployeeStatus)] = &[
    ("Alice Johnson", "alice.johnson@company.com", EmployeeStatus::Active),
    ("Bob Smith", "bob.smith@company.com", EmployeeStatus::Active),
    ("Charlie Brown", "charlie.brown@company.com", EmployeeStatus::Active),
    ("Diana Prince", "diana.prince@company.com", EmployeeStatus::Active),
    ("Eve Davis", "eve.davis@company.com", EmployeeStatus::Inactive),
];

const SAMPLE_PROJECTS: &[(&str, Ymd, Ymd)] = &[
    ("E-Commerce Platform", (2024, 1, 1), (2024, 12, 31)),
    ("Mobile Banking App", (2024, 3, 1), (2024, 9, 30)),
    ("Cloud Migration", (2024, 2, 15), (2024, 8, 15)),
];

/// Seeding failure. The whole seed was rolled back.
#[derive(Debug)]
pub enum SeedError {
    /// A built-in sample date is not a valid calendar date.
    InvalidSampleDate(Ymd),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for SeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSampleDate((y, m, d)) => {
                write!(f, "failed to insert sample data: invalid date {y}-{m}-{d}")
            }
            Self::Repo(err) => write!(f, "failed to insert sample data: {err}"),
        }
    }
}

impl Error for SeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            Self::InvalidSampleDate(_) => None,
        }
    }
}

impl From<RepoError> for SeedError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

impl From<rusqlite::Error> for SeedError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Repo(value.into())
    }
}

/// Counts of rows written by one seed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub employees: usize,
    pub projects: usize,
}

/// Returns the sample employees in insertion order.
pub fn sample_employees() -> Vec<NewEmployee> {
    SAMPLE_EMPLOYEES
        .iter()
        .map(|(name, email, status)| NewEmployee::active(*name, *email).with_status(*status))
        .collect()
}

/// Returns the sample projects in insertion order.
pub fn sample_projects() -> Result<Vec<NewProject>, SeedError> {
    SAMPLE_PROJECTS
        .iter()
        .map(|(name, start, end)| -> Result<NewProject, SeedError> {
            Ok(NewProject::new(*name, to_date(*start)?, to_date(*end)?))
        })
        .collect()
}

/// Clears the roster and inserts the sample data in one transaction.
pub fn seed_sample_data(conn: &Connection) -> Result<SeedSummary, SeedError> {
    let started_at = Instant::now();
    info!("event=seed_sample_data module=service status=start");

    match run_seed(conn) {
        Ok(summary) => {
            info!(
                "event=seed_sample_data module=service status=ok employees={} projects={} duration_ms={}",
                summary.employees,
                summary.projects,
                started_at.elapsed().as_millis()
            );
            Ok(summary)
        }
        Err(err) => {
            error!(
                "event=seed_sample_data module=service status=error duration_ms={} error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

fn run_seed(conn: &Connection) -> Result<SeedSummary, SeedError> {
    let employees = sample_employees();
    let projects = sample_projects()?;

    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)?;
    reset_roster(&tx)?;
    for employee in &employees {
        insert_employee(&tx, employee)?;
    }
    for project in &projects {
        insert_project(&tx, project)?;
    }
    tx.commit()?;

    Ok(SeedSummary {
        employees: employees.len(),
        projects: projects.len(),
    })
}

fn to_date((y, m, d): Ymd) -> Result<NaiveDate, SeedError> {
    NaiveDate::from_ymd_opt(y, m, d).ok_or(SeedError::InvalidSampleDate((y, m, d)))
}

#[cfg(test)]
mod tests {
    use super::{sample_employees, sample_projects};
    use crate::model::employee::EmployeeStatus;

    #[test]
    fn sample_roster_is_valid() {
        let employees = sample_employees();
        assert_eq!(employees.len(), 5);
        for employee in &employees {
            employee.validate().unwrap();
        }
        assert_eq!(employees[4].status, EmployeeStatus::Inactive);

        let projects = sample_projects().unwrap();
        assert_eq!(projects.len(), 3);
        for project in &projects {
            project.validate().unwrap();
        }
    }
}
