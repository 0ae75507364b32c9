use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::submission::{GradeUpdate, Submission, SubmissionCreate};
use crate::store::{submissions, Store};

/// POST /submissions - Submit work for an assignment
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<SubmissionCreate>,
) -> ApiResult<Submission> {
    let submission = submissions::create_submission(&store, &body).await?;
    Ok(ApiResponse::created(submission))
}

/// GET /submissions/:id - Get a single submission by id
pub async fn get(
    State(store): State<Store>,
    Path(submission_id): Path<i32>,
) -> ApiResult<Submission> {
    match submissions::get_submission_by_id(&store, submission_id).await? {
        Some(submission) => Ok(ApiResponse::success(submission)),
        None => Err(ApiError::not_found(format!(
            "submission {} not found",
            submission_id
        ))),
    }
}

/// GET /assignments/:id/submissions - List submissions for an assignment
pub async fn list_by_assignment(
    State(store): State<Store>,
    Path(assignment_id): Path<i32>,
) -> ApiResult<Vec<Submission>> {
    let submissions = submissions::get_submissions_by_assignment(&store, assignment_id).await?;
    Ok(ApiResponse::success(submissions))
}

/// GET /students/:id/submissions - List a student's submissions
pub async fn list_by_student(
    State(store): State<Store>,
    Path(student_id): Path<i32>,
) -> ApiResult<Vec<Submission>> {
    let submissions = submissions::get_submissions_by_student(&store, student_id).await?;
    Ok(ApiResponse::success(submissions))
}

/// PUT /submissions/:id/grade - Set grade and feedback on a submission
pub async fn grade(
    State(store): State<Store>,
    Path(submission_id): Path<i32>,
    Json(body): Json<GradeUpdate>,
) -> ApiResult<Submission> {
    body.validate()?;
    let submission = submissions::update_submission_grade(&store, submission_id, &body).await?;
    Ok(ApiResponse::success(submission))
}

/// DELETE /submissions/:id - Delete a submission, returning the removed row
pub async fn remove(
    State(store): State<Store>,
    Path(submission_id): Path<i32>,
) -> ApiResult<Submission> {
    let submission = submissions::delete_submission(&store, submission_id).await?;
    Ok(ApiResponse::success(submission))
}
