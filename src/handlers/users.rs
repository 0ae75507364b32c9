use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::user::{User, UserCreate, UserPatch, UserPut};
use crate::store::{users, Store};

/// POST /users - Create a new user
pub async fn create(State(store): State<Store>, Json(body): Json<UserCreate>) -> ApiResult<User> {
    body.validate()?;
    let user = users::create_user(&store, &body).await?;
    Ok(ApiResponse::created(user))
}

/// GET /users/:id - Get a single user by id
pub async fn get(State(store): State<Store>, Path(user_id): Path<i32>) -> ApiResult<User> {
    match users::get_user_by_id(&store, user_id).await? {
        Some(user) => Ok(ApiResponse::success(user)),
        None => Err(ApiError::not_found(format!("user {} not found", user_id))),
    }
}

/// GET /users - List all users
pub async fn list(State(store): State<Store>) -> ApiResult<Vec<User>> {
    let users = users::get_all_users(&store).await?;
    Ok(ApiResponse::success(users))
}

/// PUT /users/:id - Replace a user's mutable fields
pub async fn put(
    State(store): State<Store>,
    Path(user_id): Path<i32>,
    Json(body): Json<UserPut>,
) -> ApiResult<User> {
    body.validate()?;
    if body.id != user_id {
        return Err(ApiError::bad_request("path id does not match body id"));
    }
    let user = users::update_user(&store, user_id, &body.into_update()).await?;
    Ok(ApiResponse::success(user))
}

/// PATCH /users/:id - Merge the supplied fields into an existing user
pub async fn patch(
    State(store): State<Store>,
    Path(user_id): Path<i32>,
    Json(body): Json<UserPatch>,
) -> ApiResult<User> {
    body.validate()?;
    let existing = users::get_user_by_id(&store, user_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("user {} not found", user_id)))?;
    let user = users::update_user(&store, user_id, &body.merge(&existing)).await?;
    Ok(ApiResponse::success(user))
}

/// DELETE /users/:id - Delete a user, returning the removed row
pub async fn remove(State(store): State<Store>, Path(user_id): Path<i32>) -> ApiResult<User> {
    let user = users::delete_user(&store, user_id).await?;
    Ok(ApiResponse::success(user))
}
