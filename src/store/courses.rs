use super::models::course::{Course, CourseCreate, CourseUpdate};
use super::{Store, StoreError};

pub async fn create_course(store: &Store, new: &CourseCreate) -> Result<Course, StoreError> {
    let mut tx = store.pool().begin().await?;
    let course = sqlx::query_as::<_, Course>(
        "INSERT INTO courses (title, description, teacher_id, start_date, end_date)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.teacher_id)
    .bind(new.start_date)
    .bind(new.end_date)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "course creation failed"))?;
    tx.commit().await?;
    Ok(course)
}

pub async fn get_course_by_id(store: &Store, course_id: i32) -> Result<Option<Course>, StoreError> {
    let course = sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE id = $1")
        .bind(course_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(course)
}

pub async fn get_courses_by_teacher(
    store: &Store,
    teacher_id: i32,
) -> Result<Vec<Course>, StoreError> {
    let courses =
        sqlx::query_as::<_, Course>("SELECT * FROM courses WHERE teacher_id = $1 ORDER BY id")
            .bind(teacher_id)
            .fetch_all(store.pool())
            .await?;
    Ok(courses)
}

pub async fn update_course(
    store: &Store,
    course_id: i32,
    update: &CourseUpdate,
) -> Result<Course, StoreError> {
    let mut tx = store.pool().begin().await?;
    let course = sqlx::query_as::<_, Course>(
        "UPDATE courses
         SET title = $2, description = $3, teacher_id = $4, start_date = $5, end_date = $6
         WHERE id = $1
         RETURNING *",
    )
    .bind(course_id)
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.teacher_id)
    .bind(update.start_date)
    .bind(update.end_date)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "course update failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("course {} not found", course_id)))?;
    tx.commit().await?;
    Ok(course)
}

pub async fn delete_course(store: &Store, course_id: i32) -> Result<Course, StoreError> {
    let mut tx = store.pool().begin().await?;
    let course = sqlx::query_as::<_, Course>("DELETE FROM courses WHERE id = $1 RETURNING *")
        .bind(course_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::from_write(e, "course delete failed"))?
        .ok_or_else(|| StoreError::NotFound(format!("course {} not found", course_id)))?;
    tx.commit().await?;
    Ok(course)
}
