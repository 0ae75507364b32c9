use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::reject_invalid;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Submission {
    pub id: i32,
    pub assignment_id: i32,
    pub student_id: i32,
    pub submitted_at: DateTime<Utc>,
    pub url: Option<String>,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}

/// Grade and feedback are never set at creation; they only change through
/// the dedicated grading operation.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionCreate {
    pub assignment_id: i32,
    pub student_id: i32,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GradeUpdate {
    #[serde(default)]
    pub grade: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
}

impl GradeUpdate {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = HashMap::new();
        if let Some(grade) = &self.grade {
            if grade.len() > 20 {
                errors.insert(
                    "grade".to_string(),
                    "must be at most 20 characters".to_string(),
                );
            }
        }
        reject_invalid(errors)
    }
}
