use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::enrollment::{Enrollment, EnrollmentCreate};
use crate::store::{enrollments, Store};

/// POST /enrollments - Enroll a user in a course
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<EnrollmentCreate>,
) -> ApiResult<Enrollment> {
    let enrollment = enrollments::create_enrollment(&store, &body).await?;
    Ok(ApiResponse::created(enrollment))
}

/// GET /enrollments/:id - Get a single enrollment by id
pub async fn get(
    State(store): State<Store>,
    Path(enrollment_id): Path<i32>,
) -> ApiResult<Enrollment> {
    match enrollments::get_enrollment_by_id(&store, enrollment_id).await? {
        Some(enrollment) => Ok(ApiResponse::success(enrollment)),
        None => Err(ApiError::not_found(format!(
            "enrollment {} not found",
            enrollment_id
        ))),
    }
}

/// GET /users/:id/enrollments - List a user's enrollments
pub async fn list_by_user(
    State(store): State<Store>,
    Path(user_id): Path<i32>,
) -> ApiResult<Vec<Enrollment>> {
    let enrollments = enrollments::get_enrollments_by_user(&store, user_id).await?;
    Ok(ApiResponse::success(enrollments))
}

/// DELETE /enrollments/:id - Unenroll, returning the removed row
pub async fn remove(
    State(store): State<Store>,
    Path(enrollment_id): Path<i32>,
) -> ApiResult<Enrollment> {
    let enrollment = enrollments::delete_enrollment(&store, enrollment_id).await?;
    Ok(ApiResponse::success(enrollment))
}
