use resalloc_core::db::open_db_in_memory;
use resalloc_core::{
    seed_sample_data, EmployeeRepository, EmployeeStatus, NewEmployee, ProjectRepository,
    RepoError, RosterService, SqliteAssignmentRepository, SqliteEmployeeRepository,
    SqliteProjectRepository, TransactionalRecordUpdater, ValidationError,
};

#[test]
fn seed_inserts_sample_roster_with_stable_ids() {
    let conn = open_db_in_memory().unwrap();

    let summary = seed_sample_data(&conn).unwrap();
    assert_eq!(summary.employees, 5);
    assert_eq!(summary.projects, 3);

    let employees = SqliteEmployeeRepository::try_new(&conn)
        .unwrap()
        .list_employees()
        .unwrap();
    let ids: Vec<i64> = employees.iter().map(|e| e.employee_id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(employees[0].full_name, "Alice Johnson");
    assert_eq!(employees[4].status, EmployeeStatus::Inactive);

    let projects = SqliteProjectRepository::try_new(&conn)
        .unwrap()
        .list_projects()
        .unwrap();
    assert_eq!(projects.len(), 3);
    assert_eq!(projects[1].project_name, "Mobile Banking App");
    assert_eq!(projects[2].start_date.to_string(), "2024-02-15");
}

#[test]
fn reseeding_replaces_previous_roster() {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    let updater = TransactionalRecordUpdater::try_new(&conn).unwrap();
    updater.assign_employee_to_project(1, 1).unwrap();
    updater.delete_inactive_employee(5).unwrap();

    seed_sample_data(&conn).unwrap();

    let employees = SqliteEmployeeRepository::try_new(&conn).unwrap();
    assert_eq!(employees.list_employees().unwrap().len(), 5);
    assert!(employees.employee_exists(5).unwrap());
    let assignments: i64 = conn
        .query_row("SELECT COUNT(*) FROM employee_projects;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(assignments, 0);
}

#[test]
fn seed_failure_keeps_previous_roster() {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    conn.execute_batch(
        "CREATE TRIGGER block_project_insert
         BEFORE INSERT ON projects
         BEGIN
             SELECT RAISE(ABORT, 'projects are frozen');
         END;",
    )
    .unwrap();
    conn.execute("UPDATE employees SET full_name = 'Alice J.' WHERE employee_id = 1;", [])
        .unwrap();

    let err = seed_sample_data(&conn).unwrap_err();
    assert!(err.to_string().contains("failed to insert sample data"));

    let alice = SqliteEmployeeRepository::try_new(&conn)
        .unwrap()
        .get_employee(1)
        .unwrap()
        .unwrap();
    assert_eq!(alice.full_name, "Alice J.");
}

#[test]
fn active_report_is_sorted_by_employee_then_project_name() {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    let updater = TransactionalRecordUpdater::try_new(&conn).unwrap();
    updater.assign_employee_to_project(2, 1).unwrap();
    updater.assign_employee_to_project(1, 1).unwrap();
    updater.assign_employee_to_project(1, 2).unwrap();
    updater.assign_employee_to_project(3, 3).unwrap();
    updater.deactivate_employee(3).unwrap();

    let roster = RosterService::new(SqliteAssignmentRepository::try_new(&conn).unwrap());
    let report = roster.active_assignments().unwrap();

    assert_eq!(report.total, 3);
    let rows: Vec<(&str, &str)> = report
        .rows
        .iter()
        .map(|row| (row.full_name.as_str(), row.project_name.as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("Alice Johnson", "E-Commerce Platform"),
            ("Alice Johnson", "Mobile Banking App"),
            ("Bob Smith", "E-Commerce Platform"),
        ]
    );

    let charlie = roster.assignments_for(3).unwrap();
    assert_eq!(charlie.len(), 1);
    assert!(!charlie[0].is_active);
}

#[test]
fn empty_store_reports_no_active_assignments() {
    let conn = open_db_in_memory().unwrap();
    let roster = RosterService::new(SqliteAssignmentRepository::try_new(&conn).unwrap());

    let report = roster.active_assignments().unwrap();
    assert!(report.is_empty());
    assert_eq!(report.total, 0);
}

#[test]
fn employee_repository_validates_before_insert() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteEmployeeRepository::try_new(&conn).unwrap();

    let err = repo
        .create_employee(&NewEmployee::active("Nobody", "no-at-sign"))
        .unwrap_err();
    assert!(matches!(
        err,
        RepoError::Validation(ValidationError::InvalidEmail(_))
    ));
    assert!(repo.list_employees().unwrap().is_empty());
}

#[test]
fn model_serializes_status_as_schema_text() {
    let conn = open_db_in_memory().unwrap();
    seed_sample_data(&conn).unwrap();
    let eve = SqliteEmployeeRepository::try_new(&conn)
        .unwrap()
        .get_employee(5)
        .unwrap()
        .unwrap();

    let json = serde_json::to_value(&eve).unwrap();
    assert_eq!(json["status"], "Inactive");
    assert_eq!(json["email"], "eve.davis@company.com");
}
