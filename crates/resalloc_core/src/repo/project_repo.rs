//! Project repository contracts and SQLite implementation.

use super::schema::{ensure_connection_ready, PROJECT_COLUMNS};
use super::RepoResult;
use crate::model::project::{NewProject, Project, ProjectId};
use rusqlite::{params, Connection, Row};

const PROJECT_SELECT_SQL: &str = "SELECT
    project_id,
    project_name,
    start_date,
    end_date
FROM projects";

/// Repository interface for project operations.
pub trait ProjectRepository {
    fn create_project(&self, project: &NewProject) -> RepoResult<ProjectId>;
    fn get_project(&self, project_id: ProjectId) -> RepoResult<Option<Project>>;
    /// Lists all projects ordered by id.
    fn list_projects(&self) -> RepoResult<Vec<Project>>;
}

/// SQLite-backed project repository.
pub struct SqliteProjectRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteProjectRepository<'conn> {
    /// Creates repository from migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_connection_ready(conn, &[PROJECT_COLUMNS])?;
        Ok(Self { conn })
    }
}

impl ProjectRepository for SqliteProjectRepository<'_> {
    fn create_project(&self, project: &NewProject) -> RepoResult<ProjectId> {
        insert_project(self.conn, project)
    }

    fn get_project(&self, project_id: ProjectId) -> RepoResult<Option<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} WHERE project_id = ?1;"))?;
        let mut rows = stmt.query([project_id])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_project_row(row)?));
        }
        Ok(None)
    }

    fn list_projects(&self) -> RepoResult<Vec<Project>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{PROJECT_SELECT_SQL} ORDER BY project_id ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut projects = Vec::new();
        while let Some(row) = rows.next()? {
            projects.push(parse_project_row(row)?);
        }
        Ok(projects)
    }
}

/// Inserts one validated project on `conn`.
pub fn insert_project(conn: &Connection, project: &NewProject) -> RepoResult<ProjectId> {
    project.validate()?;

    conn.execute(
        "INSERT INTO projects (project_name, start_date, end_date) VALUES (?1, ?2, ?3);",
        params![
            project.project_name.trim(),
            project.start_date,
            project.end_date,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn parse_project_row(row: &Row<'_>) -> RepoResult<Project> {
    Ok(Project {
        project_id: row.get("project_id")?,
        project_name: row.get("project_name")?,
        start_date: row.get("start_date")?,
        end_date: row.get("end_date")?,
    })
}
