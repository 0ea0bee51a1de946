//! Project records.

use super::validation::{require_text, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Store-assigned project identifier.
pub type ProjectId = i64;

/// Persisted project row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: ProjectId,
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Insert payload for one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub project_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl NewProject {
    pub fn new(project_name: impl Into<String>, start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            project_name: project_name.into(),
            start_date,
            end_date,
        }
    }

    /// Validates name and date range before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("project_name", &self.project_name)?;
        if self.end_date < self.start_date {
            return Err(ValidationError::EndBeforeStart {
                start: self.start_date.to_string(),
                end: self.end_date.to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::NewProject;
    use crate::model::validation::ValidationError;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let project = NewProject::new("Backwards", date(2024, 5, 1), date(2024, 4, 30));
        let err = project.validate().unwrap_err();
        assert_eq!(
            err,
            ValidationError::EndBeforeStart {
                start: "2024-05-01".to_string(),
                end: "2024-04-30".to_string(),
            }
        );
    }

    #[test]
    fn validate_accepts_single_day_project() {
        let project = NewProject::new("Offsite", date(2024, 6, 1), date(2024, 6, 1));
        assert!(project.validate().is_ok());
    }
}
