use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::reject_invalid;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lesson {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LessonCreate {
    pub course_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
}

impl LessonCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_fields(&self.title, self.location.as_deref()))
    }
}

#[derive(Debug, Clone)]
pub struct LessonUpdate {
    pub course_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub duration_minutes: Option<i32>,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LessonPut {
    pub id: i32,
    pub course_id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub location: Option<String>,
}

impl LessonPut {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_fields(&self.title, self.location.as_deref()))
    }

    pub fn into_update(self) -> LessonUpdate {
        LessonUpdate {
            course_id: self.course_id,
            title: self.title,
            description: self.description,
            scheduled_at: self.scheduled_at,
            duration_minutes: self.duration_minutes,
            location: self.location,
        }
    }
}

fn validate_fields(title: &str, location: Option<&str>) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if title.is_empty() || title.len() > 255 {
        errors.insert(
            "title".to_string(),
            "must be between 1 and 255 characters".to_string(),
        );
    }
    if let Some(location) = location {
        if location.len() > 255 {
            errors.insert(
                "location".to_string(),
                "must be at most 255 characters".to_string(),
            );
        }
    }
    errors
}
