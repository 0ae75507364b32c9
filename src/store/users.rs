use super::models::user::{User, UserCreate, UserUpdate};
use super::{Store, StoreError};

pub async fn create_user(store: &Store, new: &UserCreate) -> Result<User, StoreError> {
    let mut tx = store.pool().begin().await?;
    let user = sqlx::query_as::<_, User>(
        "INSERT INTO users (username, email, role, password)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(&new.username)
    .bind(&new.email)
    .bind(&new.role)
    .bind(&new.password)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "user creation failed"))?;
    tx.commit().await?;
    Ok(user)
}

pub async fn get_user_by_id(store: &Store, user_id: i32) -> Result<Option<User>, StoreError> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
        .bind(user_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(user)
}

pub async fn get_all_users(store: &Store) -> Result<Vec<User>, StoreError> {
    let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY id")
        .fetch_all(store.pool())
        .await?;
    Ok(users)
}

/// Replace the mutable columns. Password and created_at are fixed after
/// creation. Missing rows are reported via the statement's match, not a
/// separate read.
pub async fn update_user(
    store: &Store,
    user_id: i32,
    update: &UserUpdate,
) -> Result<User, StoreError> {
    let mut tx = store.pool().begin().await?;
    let user = sqlx::query_as::<_, User>(
        "UPDATE users
         SET username = $2, email = $3, role = $4
         WHERE id = $1
         RETURNING *",
    )
    .bind(user_id)
    .bind(&update.username)
    .bind(&update.email)
    .bind(&update.role)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "user update failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("user {} not found", user_id)))?;
    tx.commit().await?;
    Ok(user)
}

pub async fn delete_user(store: &Store, user_id: i32) -> Result<User, StoreError> {
    let mut tx = store.pool().begin().await?;
    let user = sqlx::query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
        .bind(user_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StoreError::from_write(e, "user delete failed"))?
        .ok_or_else(|| StoreError::NotFound(format!("user {} not found", user_id)))?;
    tx.commit().await?;
    Ok(user)
}
