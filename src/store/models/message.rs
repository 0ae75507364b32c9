use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::collections::HashMap;

use super::reject_invalid;
use crate::error::ApiError;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Message {
    pub id: i32,
    pub sender_id: i32,
    pub receiver_id: i32,
    pub course_id: Option<i32>,
    pub content: String,
    pub sent_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessageCreate {
    pub sender_id: i32,
    pub receiver_id: i32,
    #[serde(default)]
    pub course_id: Option<i32>,
    pub content: String,
}

impl MessageCreate {
    pub fn validate(&self) -> Result<(), ApiError> {
        let mut errors = HashMap::new();
        if self.content.trim().is_empty() {
            errors.insert("content".to_string(), "must not be empty".to_string());
        }
        reject_invalid(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_content() {
        let message = MessageCreate {
            sender_id: 1,
            receiver_id: 2,
            course_id: None,
            content: "   ".into(),
        };
        assert!(message.validate().is_err());
    }
}
