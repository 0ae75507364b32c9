use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Enrollment {
    pub id: i32,
    pub user_id: i32,
    pub course_id: i32,
    pub enrolled_at: DateTime<Utc>,
}

/// The enrollment pair is the whole payload; `enrolled_at` is stamped by
/// the store and the (user_id, course_id) pair is unique.
#[derive(Debug, Clone, Deserialize)]
pub struct EnrollmentCreate {
    pub user_id: i32,
    pub course_id: i32,
}
