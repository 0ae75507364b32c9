use super::models::resource::{Resource, ResourceCreate, ResourceUpdate};
use super::{Store, StoreError};

pub async fn create_resource(store: &Store, new: &ResourceCreate) -> Result<Resource, StoreError> {
    let mut tx = store.pool().begin().await?;
    let resource = sqlx::query_as::<_, Resource>(
        "INSERT INTO resources (course_id, lesson_id, title, type, url)
         VALUES ($1, $2, $3, $4, $5)
         RETURNING *",
    )
    .bind(new.course_id)
    .bind(new.lesson_id)
    .bind(&new.title)
    .bind(&new.resource_type)
    .bind(&new.url)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "resource creation failed"))?;
    tx.commit().await?;
    Ok(resource)
}

pub async fn get_resource_by_id(
    store: &Store,
    resource_id: i32,
) -> Result<Option<Resource>, StoreError> {
    let resource = sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE id = $1")
        .bind(resource_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(resource)
}

pub async fn get_resources_by_course(
    store: &Store,
    course_id: i32,
) -> Result<Vec<Resource>, StoreError> {
    let resources =
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE course_id = $1 ORDER BY id")
            .bind(course_id)
            .fetch_all(store.pool())
            .await?;
    Ok(resources)
}

pub async fn get_resources_by_lesson(
    store: &Store,
    lesson_id: i32,
) -> Result<Vec<Resource>, StoreError> {
    let resources =
        sqlx::query_as::<_, Resource>("SELECT * FROM resources WHERE lesson_id = $1 ORDER BY id")
            .bind(lesson_id)
            .fetch_all(store.pool())
            .await?;
    Ok(resources)
}

pub async fn update_resource(
    store: &Store,
    resource_id: i32,
    update: &ResourceUpdate,
) -> Result<Resource, StoreError> {
    let mut tx = store.pool().begin().await?;
    let resource = sqlx::query_as::<_, Resource>(
        "UPDATE resources
         SET course_id = $2, lesson_id = $3, title = $4, type = $5, url = $6, uploaded_at = $7
         WHERE id = $1
         RETURNING *",
    )
    .bind(resource_id)
    .bind(update.course_id)
    .bind(update.lesson_id)
    .bind(&update.title)
    .bind(&update.resource_type)
    .bind(&update.url)
    .bind(update.uploaded_at)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "resource update failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("resource {} not found", resource_id)))?;
    tx.commit().await?;
    Ok(resource)
}

pub async fn delete_resource(store: &Store, resource_id: i32) -> Result<Resource, StoreError> {
    let mut tx = store.pool().begin().await?;
    let resource = sqlx::query_as::<_, Resource>("DELETE FROM resources WHERE id = $1 RETURNING *")
        .bind(resource_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::from_write(e, "resource delete failed"))?
        .ok_or_else(|| StoreError::NotFound(format!("resource {} not found", resource_id)))?;
    tx.commit().await?;
    Ok(resource)
}
