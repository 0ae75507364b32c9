use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::{double_option, reject_invalid};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Assignment {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentCreate {
    pub course_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl AssignmentCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_title(&self.title))
    }
}

#[derive(Debug, Clone)]
pub struct AssignmentUpdate {
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentPut {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<DateTime<Utc>>,
}

impl AssignmentPut {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_title(&self.title))
    }

    pub fn into_update(self) -> AssignmentUpdate {
        AssignmentUpdate {
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            due_date: self.due_date,
        }
    }
}

/// Partial update. A payload with no recognized fields at all is a client
/// error on this endpoint, hence `is_empty`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignmentPatch {
    pub course_id: Option<i32>,
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

impl AssignmentPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.title {
            Some(title) => reject_invalid(validate_title(title)),
            None => Ok(()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.course_id.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
    }

    pub fn merge(self, existing: &Assignment) -> AssignmentUpdate {
        AssignmentUpdate {
            course_id: self.course_id.unwrap_or(existing.course_id),
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            due_date: self.due_date.unwrap_or(existing.due_date),
        }
    }
}

fn validate_title(title: &str) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if title.is_empty() || title.len() > 255 {
        errors.insert(
            "title".to_string(),
            "must be between 1 and 255 characters".to_string(),
        );
    }
    errors
}
