use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::reject_invalid;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Resource {
    pub id: i32,
    pub course_id: i32,
    pub lesson_id: Option<i32>,
    pub title: String,
    // e.g. pdf, video, link
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub resource_type: Option<String>,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourceCreate {
    pub course_id: i32,
    #[serde(default)]
    pub lesson_id: Option<i32>,
    pub title: String,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    pub url: String,
}

impl ResourceCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_fields(&self.title, &self.url, self.resource_type.as_deref()))
    }
}

/// Full replacement keeps `uploaded_at` caller-supplied: replacing the
/// whole document includes its timestamp.
#[derive(Debug, Clone)]
pub struct ResourceUpdate {
    pub course_id: i32,
    pub lesson_id: Option<i32>,
    pub title: String,
    pub resource_type: Option<String>,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePut {
    pub id: i32,
    pub course_id: i32,
    #[serde(default)]
    pub lesson_id: Option<i32>,
    pub title: String,
    #[serde(default, rename = "type")]
    pub resource_type: Option<String>,
    pub url: String,
    pub uploaded_at: DateTime<Utc>,
}

impl ResourcePut {
    pub fn validate(&self) -> Result<(), ApiError> {
        reject_invalid(validate_fields(&self.title, &self.url, self.resource_type.as_deref()))
    }

    pub fn into_update(self) -> ResourceUpdate {
        ResourceUpdate {
            course_id: self.course_id,
            lesson_id: self.lesson_id,
            title: self.title,
            resource_type: self.resource_type,
            url: self.url,
            uploaded_at: self.uploaded_at,
        }
    }
}

fn validate_fields(
    title: &str,
    url: &str,
    resource_type: Option<&str>,
) -> HashMap<String, String> {
    let mut errors = HashMap::new();
    if title.is_empty() || title.len() > 255 {
        errors.insert(
            "title".to_string(),
            "must be between 1 and 255 characters".to_string(),
        );
    }
    if url.is_empty() {
        errors.insert("url".to_string(), "must not be empty".to_string());
    }
    if let Some(resource_type) = resource_type {
        if resource_type.len() > 50 {
            errors.insert(
                "type".to_string(),
                "must be at most 50 characters".to_string(),
            );
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_field_round_trips_under_its_wire_name() {
        let create: ResourceCreate = serde_json::from_value(serde_json::json!({
            "course_id": 1,
            "title": "Lecture slides",
            "type": "pdf",
            "url": "https://files.school.example/slides.pdf"
        }))
        .unwrap();
        assert_eq!(create.resource_type.as_deref(), Some("pdf"));
    }
}
