use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::{double_option, reject_invalid};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Course {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CourseCreate {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub teacher_id: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl CourseCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_title(&self.title))
    }
}

#[derive(Debug, Clone)]
pub struct CourseUpdate {
    pub title: String,
    pub description: Option<String>,
    pub teacher_id: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CoursePut {
    pub id: i32,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub teacher_id: i32,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl CoursePut {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_title(&self.title))
    }

    pub fn into_update(self) -> CourseUpdate {
        CourseUpdate {
            title: self.title,
            description: self.description,
            teacher_id: self.teacher_id,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Partial update. Nullable columns use a double `Option` so that an
/// omitted field keeps its stored value while an explicit `null` clears it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoursePatch {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub description: Option<Option<String>>,
    pub teacher_id: Option<i32>,
    #[serde(default, deserialize_with = "double_option")]
    pub start_date: Option<Option<NaiveDate>>,
    #[serde(default, deserialize_with = "double_option")]
    pub end_date: Option<Option<NaiveDate>>,
}

impl CoursePatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        match &self.title {
            Some(title) => reject_invalid(validate_title(title)),
            None => Ok(()),
        }
    }

    pub fn merge(self, existing: &Course) -> CourseUpdate {
        CourseUpdate {
            title: self.title.unwrap_or_else(|| existing.title.clone()),
            description: self
                .description
                .unwrap_or_else(|| existing.description.clone()),
            teacher_id: self.teacher_id.unwrap_or(existing.teacher_id),
            start_date: self.start_date.unwrap_or(existing.start_date),
            end_date: self.end_date.unwrap_or(existing.end_date),
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
