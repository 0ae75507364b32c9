use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::{is_valid_email, reject_invalid, ROLES};
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
    // Stored in the row snapshot but never echoed back to clients
    #[serde(skip_serializing)]
    pub password: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl UserCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = HashMap::new();
        if self.username.is_empty() || self.username.len() > 50 {
            errors.insert(
                "username".to_string(),
                "must be between 1 and 50 characters".to_string(),
            );
        }
        if !is_valid_email(&self.email) {
            errors.insert("email".to_string(), "must be a valid email address".to_string());
        }
        if self.password.len() < 8 {
            errors.insert(
                "password".to_string(),
                "must be at least 8 characters".to_string(),
            );
        }
        if !ROLES.contains(&self.role.as_str()) {
            errors.insert(
                "role".to_string(),
                "must be one of: teacher, student, admin".to_string(),
            );
        }
        reject_invalid(errors)
    }
}

/// Write payload shared by the PUT path and the PATCH merge. Password and
/// created_at are fixed after creation.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub username: String,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UserPut {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub role: String,
}

impl UserPut {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = HashMap::new();
        if self.username.is_empty() || self.username.len() > 50 {
            errors.insert(
                "username".to_string(),
                "must be between 1 and 50 characters".to_string(),
            );
        }
        if !is_valid_email(&self.email) {
            errors.insert("email".to_string(), "must be a valid email address".to_string());
        }
        if !ROLES.contains(&self.role.as_str()) {
            errors.insert(
                "role".to_string(),
                "must be one of: teacher, student, admin".to_string(),
            );
        }
        reject_invalid(errors)
    }

    pub fn into_update(self) -> UserUpdate {
        UserUpdate {
            username: self.username,
            email: self.email,
            role: self.role,
        }
    }
}

/// Partial update. All columns here are non-nullable, so a plain `Option`
/// is enough: absent and null both mean "leave unchanged".
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserPatch {
    pub username: Option<String>,
    pub email: Option<String>,
    pub role: Option<String>,
}

impl UserPatch {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = HashMap::new();
        if let Some(username) = &self.username {
            if username.is_empty() || username.len() > 50 {
                errors.insert(
                    "username".to_string(),
                    "must be between 1 and 50 characters".to_string(),
                );
            }
        }
        if let Some(email) = &self.email {
            if !is_valid_email(email) {
                errors.insert("email".to_string(), "must be a valid email address".to_string());
            }
        }
        if let Some(role) = &self.role {
            if !ROLES.contains(&role.as_str()) {
                errors.insert(
                    "role".to_string(),
                    "must be one of: teacher, student, admin".to_string(),
                );
            }
        }
        reject_invalid(errors)
    }

    /// Overlay the supplied fields on an existing row, producing the same
    /// write payload a full replacement uses.
    pub fn merge(self, existing: &User) -> UserUpdate {
        UserUpdate {
            username: self.username.unwrap_or_else(|| existing.username.clone()),
            email: self.email.unwrap_or_else(|| existing.email.clone()),
            role: self.role.unwrap_or_else(|| existing.role.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn existing() -> User {
        User {
            id: 7,
            username: "maria".into(),
            email: "maria@school.example".into(),
            role: "student".into(),
            password: "hunter2hunter2".into(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn create_rejects_unknown_role() {
        let user: UserCreate = serde_json::from_value(serde_json::json!({
            "username": "maria",
            "email": "maria@school.example",
            "password": "longenough",
            "role": "wizard"
        }))
        .unwrap();
        let err = user.validate().unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn create_rejects_short_password() {
        let user = UserCreate {
            username: "maria".into(),
            email: "maria@school.example".into(),
            password: "short".into(),
            role: "student".into(),
        };
        assert!(user.validate().is_err());
    }

    #[test]
    fn patch_merge_preserves_omitted_fields() {
        let patch: UserPatch = serde_json::from_value(serde_json::json!({
            "username": "maria2"
        }))
        .unwrap();
        let merged = patch.merge(&existing());
        assert_eq!(merged.username, "maria2");
        assert_eq!(merged.email, "maria@school.example");
        assert_eq!(merged.role, "student");
    }

    #[test]
    fn patch_merge_applies_role_only() {
        let patch: UserPatch = serde_json::from_value(serde_json::json!({
            "role": "teacher"
        }))
        .unwrap();
        let merged = patch.merge(&existing());
        assert_eq!(merged.username, "maria");
        assert_eq!(merged.role, "teacher");
    }

    #[test]
    fn password_is_not_serialized() {
        let value = serde_json::to_value(existing()).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["username"], "maria");
    }
}
