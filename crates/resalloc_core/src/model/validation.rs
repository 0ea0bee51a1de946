//! Validation failures raised before insert payloads reach the store.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Rejection reason for an insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required text field is empty or whitespace.
    BlankField(&'static str),
    /// Email has no `@` separator.
    InvalidEmail(String),
    /// Project end date precedes its start date.
    EndBeforeStart { start: String, end: String },
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankField(field) => write!(f, "`{field}` cannot be blank"),
            Self::InvalidEmail(value) => write!(f, "invalid email address `{value}`"),
            Self::EndBeforeStart { start, end } => {
                write!(f, "project end date {end} is earlier than start date {start}")
            }
        }
    }
}

impl Error for ValidationError {}

pub(crate) fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::BlankField(field));
    }
    Ok(())
}
