use super::models::assignment::{Assignment, AssignmentCreate, AssignmentUpdate};
use super::{Store, StoreError};

pub async fn create_assignment(
    store: &Store,
    new: &AssignmentCreate,
) -> Result<Assignment, StoreError> {
    let mut tx = store.pool().begin().await?;
    let assignment = sqlx::query_as::<_, Assignment>(
        "INSERT INTO assignments (course_id, title, description, due_date)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(new.course_id)
    .bind(&new.title)
    .bind(&new.description)
    .bind(new.due_date)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "assignment creation failed"))?;
    tx.commit().await?;
    Ok(assignment)
}

pub async fn get_assignment_by_id(
    store: &Store,
    assignment_id: i32,
) -> Result<Option<Assignment>, StoreError> {
    let assignment = sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE id = $1")
        .bind(assignment_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(assignment)
}

pub async fn get_assignments_by_course(
    store: &Store,
    course_id: i32,
) -> Result<Vec<Assignment>, StoreError> {
    let assignments =
        sqlx::query_as::<_, Assignment>("SELECT * FROM assignments WHERE course_id = $1 ORDER BY id")
            .bind(course_id)
            .fetch_all(store.pool())
            .await?;
    Ok(assignments)
}

pub async fn update_assignment(
    store: &Store,
    assignment_id: i32,
    update: &AssignmentUpdate,
) -> Result<Assignment, StoreError> {
    let mut tx = store.pool().begin().await?;
    let assignment = sqlx::query_as::<_, Assignment>(
        "UPDATE assignments
         SET course_id = $2, title = $3, description = $4, due_date = $5
         WHERE id = $1
         RETURNING *",
    )
    .bind(assignment_id)
    .bind(update.course_id)
    .bind(&update.title)
    .bind(&update.description)
    .bind(update.due_date)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "assignment update failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("assignment {} not found", assignment_id)))?;
    tx.commit().await?;
    Ok(assignment)
}

pub async fn delete_assignment(
    store: &Store,
    assignment_id: i32,
) -> Result<Assignment, StoreError> {
    let mut tx = store.pool().begin().await?;
    let assignment =
        sqlx::query_as::<_, Assignment>("DELETE FROM assignments WHERE id = $1 RETURNING *")
            .bind(assignment_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StoreError::from_write(e, "assignment delete failed"))?
            .ok_or_else(|| StoreError::NotFound(format!("assignment {} not found", assignment_id)))?;
    tx.commit().await?;
    Ok(assignment)
}
