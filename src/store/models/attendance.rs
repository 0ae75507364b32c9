use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::{reject_invalid, ATTENDANCE_STATUSES};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Attendance {
    pub id: i32,
    pub lesson_id: i32,
    pub student_id: i32,
    pub status: String,
    pub recorded_at: DateTime<Utc>,
    pub url: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendanceCreate {
    pub lesson_id: i32,
    pub student_id: i32,
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl AttendanceCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_status(&self.status))
    }
}

/// Full replacement: both timestamps are caller-supplied here, unlike at
/// creation where the store assigns them.
#[derive(Debug, Clone)]
pub struct AttendanceUpdate {
    pub lesson_id: i32,
    pub student_id: i32,
    pub status: String,
    pub url: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttendancePut {
    pub id: i32,
    pub lesson_id: i32,
    pub student_id: i32,
    pub status: String,
    #[serde(default)]
    pub url: Option<String>,
    pub recorded_at: DateTime<Utc>,
    pub uploaded_at: DateTime<Utc>,
}

impl AttendancePut {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_status(&self.status))
    }

    pub fn into_update(self) -> AttendanceUpdate {
        AttendanceUpdate {
            lesson_id: self.lesson_id,
            student_id: self.student_id,
            status: self.status,
            url: self.url,
            recorded_at: self.recorded_at,
            uploaded_at: self.uploaded_at,
        }
    }
}

fn validate_status(status: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if !ATTENDANCE_STATUSES.contains(&status) {
        errors.insert(
            "status".to_string(),
            "must be one of: present, absent, late".to_string(),
        );
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_status_outside_enumeration() {
        let create = AttendanceCreate {
            lesson_id: 1,
            student_id: 2,
            status: "excused".into(),
            url: None,
        };
        let err = create.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn accepts_all_known_statuses() {
        for status in ATTENDANCE_STATUSES {
            let create = AttendanceCreate {
                lesson_id: 1,
                student_id: 2,
                status: status.into(),
                url: None,
            };
            assert!(create.validate().is_ok(), "status {} should be valid", status);
        }
    }
}
