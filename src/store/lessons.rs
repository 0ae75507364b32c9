use super::models::lesson::{Lesson, LessonCreate, LessonUpdate};
use super::{Store, StoreError};

pub async fn create_lesson(store: &Store, new: &LessonCreate) -> Result<Lesson, StoreError> {
    let mut tx = store.pool().begin().await?;
    let lesson = sqlx::query_as::<_, Lesson>(
        "INSERT INTO lessons (course_id, title, description, scheduled_at, duration_minutes, location)
         VALUES ($1, $2, $3, $4, $5, $6)
         RETURNING *",
    )
    .bind(new.course_id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.scheduled_at)
    .bind(new.duration_minutes)
    .bind(&new.location)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "lesson creation failed"))?;
    tx.commit().await?;
    Ok(lesson)
}

pub async fn get_lesson_by_id(store: &Store, lesson_id: i32) -> Result<Option<Lesson>, StoreError> {
    let lesson = sqlx::query_as::<_, Lesson>("SELECT * FROM lessons WHERE id = $1")
        .bind(lesson_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(lesson)
}

/// Lessons come back in schedule order so course views read chronologically
pub async fn get_lessons_by_course(
    store: &Store,
    course_id: i32,
) -> Result<Vec<Lesson>, StoreError> {
    let lessons = sqlx::query_as::<_, Lesson>(
        "SELECT * FROM lessons WHERE course_id = $1 ORDER BY scheduled_at",
    )
    .bind(course_id)
    .fetch_all(store.pool())
    .await?;
    Ok(lessons)
}

pub async fn update_lesson(
    store: &Store,
    lesson_id: i32,
    update: &LessonUpdate,
) -> Result<Lesson, StoreError> {
    let mut tx = store.pool().begin().await?;
    let lesson = sqlx::query_as::<_, Lesson>(
        "UPDATE lessons
         SET course_id = $2, title = $3, description = $4, scheduled_at = $5,
             duration_minutes = $6, location = $7
         WHERE id = $1
         RETURNING *",
    )
    .bind(lesson_id)
    .bind(update.course_id)
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.scheduled_at)
    .bind(update.duration_minutes)
    .bind(&update.location)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "lesson update failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("lesson {} not found", lesson_id)))?;
    tx.commit().await?;
    Ok(lesson)
}

pub async fn delete_lesson(store: &Store, lesson_id: i32) -> Result<Lesson, StoreError> {
    let mut tx = store.pool().begin().await?;
    let lesson = sqlx::query_as::<_, Lesson>("DELETE FROM lessons WHERE id = $1 RETURNING *")
        .bind(lesson_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::from_write(e, "lesson delete failed"))?
        .ok_or_else(|| StoreError::NotFound(format!("lesson {} not found", lesson_id)))?;
    tx.commit().await?;
    Ok(lesson)
}
