//! Command line argument definitions.

use clap::{Parser, Subcommand};
use resalloc_core::{EmployeeId, LogLevel, ProjectId};
use std::path::PathBuf;

/// Resource allocation console: employees, projects and assignments.
#[derive(Parser, Debug)]
#[command(name = "resalloc")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// SQLite database file (in-memory store when omitted)
    #[arg(long, global = true, env = "RESALLOC_DB", value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error
    #[arg(long, global = true, env = "RESALLOC_LOG_LEVEL", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Absolute directory for rolling log files
    #[arg(long, global = true, env = "RESALLOC_LOG_DIR", value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replace the roster with the sample employees and projects
    Seed,

    /// Assign an employee to a project via AssignEmployeeToProject
    Assign {
        #[arg(value_name = "EMPLOYEE_ID", allow_negative_numbers = true)]
        employee_id: EmployeeId,

        #[arg(value_name = "PROJECT_ID", allow_negative_numbers = true)]
        project_id: ProjectId,
    },

    /// Deactivate an employee and all of their active assignments
    Deactivate {
        #[arg(value_name = "EMPLOYEE_ID", allow_negative_numbers = true)]
        employee_id: EmployeeId,
    },

    /// Delete an inactive employee (assignments are removed with it)
    Delete {
        #[arg(value_name = "EMPLOYEE_ID", allow_negative_numbers = true)]
        employee_id: EmployeeId,
    },

    /// Report whether an employee exists
    Exists {
        #[arg(value_name = "EMPLOYEE_ID", allow_negative_numbers = true)]
        employee_id: EmployeeId,
    },

    /// Show all active assignments
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show all employees
    Employees {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show all projects
    Projects {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Run the scripted walkthrough (seed, assign, deactivate, delete)
    Demo,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Commands};
    use clap::Parser;
    use resalloc_core::LogLevel;

    #[test]
    fn parses_assign_with_global_options() {
        let cli = Cli::try_parse_from([
            "resalloc",
            "--db",
            "/tmp/alloc.sqlite3",
            "--log-level",
            "warn",
            "assign",
            "1",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LogLevel::Warn));
        assert!(matches!(
            cli.command,
            Commands::Assign {
                employee_id: 1,
                project_id: 2
            }
        ));
    }

    #[test]
    fn rejects_unknown_log_level() {
        let result = Cli::try_parse_from(["resalloc", "--log-level", "loud", "list"]);
        assert!(result.is_err());
    }

    #[test]
    fn list_accepts_json_flag() {
        let cli = Cli::try_parse_from(["resalloc", "list", "--json"]).unwrap();
        assert!(matches!(cli.command, Commands::List { json: true }));
    }
}
