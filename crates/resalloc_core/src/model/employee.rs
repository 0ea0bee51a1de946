//! Employee records and status lifecycle.

use super::validation::{require_text, ValidationError};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Store-assigned employee identifier.
pub type EmployeeId = i64;

/// Employment status persisted in `employees.status`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    Inactive,
}

impl EmployeeStatus {
    /// Column value used by the schema check constraint.
    pub fn as_db_str(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }

    pub fn from_db_str(value: &str) -> Option<Self> {
        match value {
            "Active" => Some(Self::Active),
            "Inactive" => Some(Self::Inactive),
            _ => None,
        }
    }
}

impl Display for EmployeeStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_db_str())
    }
}

/// Persisted employee row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: EmployeeId,
    pub full_name: String,
    pub email: String,
    pub status: EmployeeStatus,
}

impl Employee {
    pub fn is_active(&self) -> bool {
        self.status == EmployeeStatus::Active
    }
}

/// Insert payload for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub full_name: String,
    pub email: String,
    pub status: EmployeeStatus,
}

impl NewEmployee {
    /// Creates an `Active` employee payload.
    pub fn active(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            email: email.into(),
            status: EmployeeStatus::Active,
        }
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self
    }

    /// Validates text fields before persistence.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("full_name", &self.full_name)?;
        require_text("email", &self.email)?;
        if !self.email.contains('@') {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{EmployeeStatus, NewEmployee};
    use crate::model::validation::ValidationError;

    #[test]
    fn status_round_trips_through_db_text() {
        for status in [EmployeeStatus::Active, EmployeeStatus::Inactive] {
            assert_eq!(EmployeeStatus::from_db_str(status.as_db_str()), Some(status));
        }
        assert_eq!(EmployeeStatus::from_db_str("active"), None);
    }

    #[test]
    fn validate_rejects_blank_name_and_bad_email() {
        let blank = NewEmployee::active("   ", "x@company.com");
        assert_eq!(
            blank.validate(),
            Err(ValidationError::BlankField("full_name"))
        );

        let bad_email = NewEmployee::active("Zed", "zed.company.com");
        assert!(matches!(
            bad_email.validate(),
            Err(ValidationError::InvalidEmail(_))
        ));

        assert!(NewEmployee::active("Zed", "zed@company.com")
            .validate()
            .is_ok());
    }
}
