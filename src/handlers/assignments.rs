use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::assignment::{
    Assignment, AssignmentCreate, AssignmentPatch, AssignmentPut,
};
use crate::store::{assignments, Store};

/// POST /assignments - Create a new assignment
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<AssignmentCreate>,
) -> ApiResult<Assignment> {
    body.validate()?;
    let assignment = assignments::create_assignment(&store, &body).await?;
    Ok(ApiResponse::created(assignment))
}

/// GET /assignments/:id - Get a single assignment by id
pub async fn get(
    State(store): State<Store>,
    Path(assignment_id): Path<i32>,
) -> ApiResult<Assignment> {
    match assignments::get_assignment_by_id(&store, assignment_id).await? {
        Some(assignment) => Ok(ApiResponse::success(assignment)),
        None => Err(ApiError::not_found(format!(
            "assignment {} not found",
            assignment_id
        ))),
    }
}

/// GET /courses/:id/assignments - List assignments for a course
pub async fn list_by_course(
    State(store): State<Store>,
    Path(course_id): Path<i32>,
) -> ApiResult<Vec<Assignment>> {
    let assignments = assignments::get_assignments_by_course(&store, course_id).await?;
    Ok(ApiResponse::success(assignments))
}

/// PUT /assignments/:id - Replace all mutable assignment fields
pub async fn put(
    State(store): State<Store>,
    Path(assignment_id): Path<i32>,
    Json(body): Json<AssignmentPut>,
) -> ApiResult<Assignment> {
    body.validate()?;
    if body.id != assignment_id {
        return Err(ApiError::bad_request("path id does not match body id"));
    }
    let assignment =
        assignments::update_assignment(&store, assignment_id, &body.into_update()).await?;
    Ok(ApiResponse::success(assignment))
}

/// PATCH /assignments/:id - Merge the supplied fields into an existing
/// assignment. A payload without any recognized field is a client error.
pub async fn patch(
    State(store): State<Store>,
    Path(assignment_id): Path<i32>,
    Json(body): Json<AssignmentPatch>,
) -> ApiResult<Assignment> {
    body.validate()?;
    let existing = assignments::get_assignment_by_id(&store, assignment_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("assignment {} not found", assignment_id)))?;
    if body.is_empty() {
        return Err(ApiError::bad_request("no fields found for update"));
    }
    let assignment =
        assignments::update_assignment(&store, assignment_id, &body.merge(&existing)).await?;
    Ok(ApiResponse::success(assignment))
}

/// DELETE /assignments/:id - Delete an assignment, returning the removed row
pub async fn remove(
    State(store): State<Store>,
    Path(assignment_id): Path<i32>,
) -> ApiResult<Assignment> {
    let assignment = assignments::delete_assignment(&store, assignment_id).await?;
    Ok(ApiResponse::success(assignment))
}
