use super::models::enrollment::{Enrollment, EnrollmentCreate};
use super::{Store, StoreError};

/// Fails with a constraint error both when either side of the pair does
/// not exist and when the user is already enrolled in the course.
pub async fn create_enrollment(
    store: &Store,
    new: &EnrollmentCreate,
) -> Result<Enrollment, StoreError> {
    let mut tx = store.pool().begin().await?;
    let enrollment = sqlx::query_as::<_, Enrollment>(
        "INSERT INTO enrollments (user_id, course_id)
         VALUES ($1, $2)
         RETURNING *",
    )
    .bind(new.user_id)
    .bind(new.course_id)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "enrollment creation failed"))?;
    tx.commit().await?;
    Ok(enrollment)
}

pub async fn get_enrollment_by_id(
    store: &Store,
    enrollment_id: i32,
) -> Result<Option<Enrollment>, StoreError> {
    let enrollment = sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE id = $1")
        .bind(enrollment_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(enrollment)
}

pub async fn get_enrollments_by_user(
    store: &Store,
    user_id: i32,
) -> Result<Vec<Enrollment>, StoreError> {
    let enrollments =
        sqlx::query_as::<_, Enrollment>("SELECT * FROM enrollments WHERE user_id = $1 ORDER BY id")
            .bind(user_id)
            .fetch_all(store.pool())
            .await?;
    Ok(enrollments)
}

pub async fn delete_enrollment(
    store: &Store,
    enrollment_id: i32,
) -> Result<Enrollment, StoreError> {
    let mut tx = store.pool().begin().await?;
    let enrollment =
        sqlx::query_as::<_, Enrollment>("DELETE FROM enrollments WHERE id = $1 RETURNING *")
            .bind(enrollment_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StoreError::from_write(e, "enrollment delete failed"))?
            .ok_or_else(|| StoreError::NotFound(format!("enrollment {} not found", enrollment_id)))?;
    tx.commit().await?;
    Ok(enrollment)
}
