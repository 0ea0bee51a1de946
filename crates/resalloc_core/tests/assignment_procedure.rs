use chrono::NaiveDate;
use resalloc_core::db::open_db_in_memory;
use resalloc_core::{
    seed_sample_data, AssignmentRepository, EmployeeRepository, NewEmployee, NewProject,
    ProjectRepository, RepoError, SqliteAssignmentRepository, SqliteEmployeeRepository,
    SqliteProjectRepository,
};
use rusqlite::Connection;

fn setup() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    conn
}

fn rejection(err: RepoError) -> String {
    match err {
        RepoError::ProcedureRejected(message) => message,
        other => panic!("expected procedure rejection, got: {other}"),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn procedure_rejects_unknown_employee() {
    let conn = setup();
    let repo = SqliteAssignmentRepository::try_new(&conn).unwrap();

    let message = rejection(repo.assign(999, 1).unwrap_err());
    assert_eq!(message, "Employee does not exist");
}

#[test]
fn procedure_rejects_inactive_employee() {
    let conn = setup();
    let repo = SqliteAssignmentRepository::try_new(&conn).unwrap();

    let message = rejection(repo.assign(5, 1).unwrap_err());
    assert_eq!(message, "Employee is not active");
    assert!(repo.get_assignment(5, 1).unwrap().is_none());
}

#[test]
fn procedure_rejects_unknown_project() {
    let conn = setup();
    let repo = SqliteAssignmentRepository::try_new(&conn).unwrap();

    let message = rejection(repo.assign(1, 999).unwrap_err());
    assert_eq!(message, "Project does not exist");
}

#[test]
fn procedure_limits_employee_to_three_active_projects() {
    let conn = setup();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();
    let fourth = projects
        .create_project(&NewProject::new(
            "Data Warehouse",
            date(2024, 4, 1),
            date(2024, 10, 31),
        ))
        .unwrap();
    assert_eq!(fourth, 4);

    let repo = SqliteAssignmentRepository::try_new(&conn).unwrap();
    for project in 1..=3 {
        repo.assign(1, project).unwrap();
    }

    let message = rejection(repo.assign(1, fourth).unwrap_err());
    assert_eq!(message, "Employee already has 3 active projects");
    assert_eq!(repo.list_for_employee(1).unwrap().len(), 3);
}

#[test]
fn inactive_assignments_do_not_count_toward_employee_limit() {
    let conn = setup();
    let projects = SqliteProjectRepository::try_new(&conn).unwrap();
    let fourth = projects
        .create_project(&NewProject::new(
            "Data Warehouse",
            date(2024, 4, 1),
            date(2024, 10, 31),
        ))
        .unwrap();
    let repo = SqliteAssignmentRepository::try_new(&conn).unwrap();
    for project in 1..=3 {
        repo.assign(1, project).unwrap();
    }
    conn.execute(
        "UPDATE employee_projects SET is_active = 0 WHERE employee_id = 1 AND project_id = 3;",
        [],
    )
    .unwrap();

    repo.assign(1, fourth).unwrap();
    assert!(repo.get_assignment(1, fourth).unwrap().unwrap().is_active);
}

#[test]
fn procedure_limits_project_to_ten_active_employees() {
    let conn = setup();
    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    let repo = SqliteAssignmentRepository::try_new(&conn).unwrap();

    let mut hired = Vec::new();
    for index in 0..11 {
        let id = employees
            .create_employee(&NewEmployee::active(
                format!("Contractor {index}"),
                format!("contractor{index}@company.com"),
            ))
            .unwrap();
        hired.push(id);
    }

    for id in &hired[..10] {
        repo.assign(*id, 2).unwrap();
    }

    let message = rejection(repo.assign(hired[10], 2).unwrap_err());
    assert_eq!(message, "Project already has 10 active employees");
}

#[test]
fn non_procedure_failures_stay_db_errors() {
    let conn = setup();
    conn.execute_batch("DROP TRIGGER AssignEmployeeToProject_exec;")
        .unwrap();

    let err = resalloc_core::repo::assignment_repo::call_assign_procedure(&conn, 1, 1)
        .unwrap_err();
    assert!(matches!(err, RepoError::Db(_)));
}
