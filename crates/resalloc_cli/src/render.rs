//! Console rendering for command results.

use chrono::{DateTime, Local};
use colored::Colorize;
use resalloc_core::{
    ActiveAssignmentReport, Employee, Project, RecordUpdateError, RepoError, SeedSummary,
};

const TABLE_WIDTH: usize = 95;

pub fn banner() {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║     RESOURCE ALLOCATION MANAGEMENT SYSTEM                  ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();
}

pub fn section(title: &str) {
    println!("\n=== {title} ===\n");
}

pub fn success(message: &str) {
    println!("{}", format!("✓ SUCCESS: {message}").green());
}

pub fn detail(message: &str) {
    println!("{}", format!("  - {message}").green());
}

pub fn notice(message: &str) {
    eprintln!("{}", message.yellow());
}

pub fn seeded(summary: &SeedSummary) {
    println!("{}", "✓ Sample data inserted successfully!".green());
    detail(&format!("{} Employees added", summary.employees));
    detail(&format!("{} Projects added", summary.projects));
}

/// Prints a classified operation failure.
pub fn update_failure(err: &RecordUpdateError) {
    let line = match err {
        RecordUpdateError::NotFound { employee_id, .. } => {
            format!("✗ ERROR: Employee with ID {employee_id} does not exist")
        }
        RecordUpdateError::InvalidState { details, .. } => format!("✗ ERROR: {details}"),
        RecordUpdateError::Inconsistent { .. } => format!("✗ ERROR: {err}"),
        RecordUpdateError::Store { source, .. } => format!("✗ SQL ERROR: {source}"),
    };
    println!("{}", line.red());
}

pub fn repo_failure(err: &RepoError) {
    println!("{}", format!("✗ SQL ERROR: {err}").red());
}

pub fn fatal(err: &anyhow::Error) {
    eprintln!("{}", format!("\n[FATAL ERROR] {err:#}").red());
}

pub fn active_assignments(report: &ActiveAssignmentReport) {
    println!(
        "{:<5} {:<20} {:<10} {:<5} {:<25} {:<20}",
        "EmpID", "Employee Name", "Status", "PrjID", "Project Name", "Assigned On"
    );
    println!("{}", "-".repeat(TABLE_WIDTH));

    if report.is_empty() {
        println!("{}", "No active assignments found.".yellow());
        return;
    }

    for row in &report.rows {
        println!(
            "{:<5} {:<20} {:<10} {:<5} {:<25} {:<20}",
            row.employee_id,
            row.full_name,
            row.status.as_db_str(),
            row.project_id,
            row.project_name,
            format_epoch_ms(row.assigned_on)
        );
    }
    println!("{}", "-".repeat(TABLE_WIDTH));
    println!("Total Active Assignments: {}", report.total);
}

pub fn employees(employees: &[Employee]) {
    println!(
        "{:<5} {:<20} {:<35} {:<10}",
        "EmpID", "Employee Name", "Email", "Status"
    );
    println!("{}", "-".repeat(TABLE_WIDTH));
    if employees.is_empty() {
        println!("{}", "No employees found.".yellow());
        return;
    }
    for employee in employees {
        println!(
            "{:<5} {:<20} {:<35} {:<10}",
            employee.employee_id,
            employee.full_name,
            employee.email,
            employee.status.as_db_str()
        );
    }
}

pub fn projects(projects: &[Project]) {
    println!(
        "{:<5} {:<25} {:<12} {:<12}",
        "PrjID", "Project Name", "Start", "End"
    );
    println!("{}", "-".repeat(TABLE_WIDTH));
    if projects.is_empty() {
        println!("{}", "No projects found.".yellow());
        return;
    }
    for project in projects {
        println!(
            "{:<5} {:<25} {:<12} {:<12}",
            project.project_id,
            project.project_name,
            project.start_date.to_string(),
            project.end_date.to_string()
        );
    }
}

/// Formats epoch milliseconds as local `YYYY-MM-DD HH:MM`.
pub fn format_epoch_ms(epoch_ms: i64) -> String {
    DateTime::from_timestamp_millis(epoch_ms)
        .map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| epoch_ms.to_string())
}

#[cfg(test)]
mod tests {
    use super::format_epoch_ms;

    #[test]
    fn epoch_formatting_has_minute_precision() {
        let text = format_epoch_ms(1_704_067_200_000);
        assert_eq!(text.len(), "2024-01-01 00:00".len());
        assert!(text.starts_with("202"));
    }

    #[test]
    fn out_of_range_epoch_falls_back_to_raw_value() {
        assert_eq!(format_epoch_ms(i64::MAX), i64::MAX.to_string());
    }
}
