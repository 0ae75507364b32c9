use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::course::{Course, CourseCreate, CoursePatch, CoursePut};
use crate::store::{courses, Store};

/// POST /courses - Create a new course
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<CourseCreate>,
) -> ApiResult<Course> {
    body.validate()?;
    let course = courses::create_course(&store, &body).await?;
    Ok(ApiResponse::created(course))
}

/// GET /courses/:id - Get a single course by id
pub async fn get(State(store): State<Store>, Path(course_id): Path<i32>) -> ApiResult<Course> {
    match courses::get_course_by_id(&store, course_id).await? {
        Some(course) => Ok(ApiResponse::success(course)),
        None => Err(ApiError::not_found(format!("course {} not found", course_id))),
    }
}

/// GET /teachers/:id/courses - List courses taught by a teacher
pub async fn list_by_teacher(
    State(store): State<Store>,
    Path(teacher_id): Path<i32>,
) -> ApiResult<Vec<Course>> {
    let courses = courses::get_courses_by_teacher(&store, teacher_id).await?;
    Ok(ApiResponse::success(courses))
}

/// PUT /courses/:id - Replace all mutable course fields
pub async fn put(
    State(store): State<Store>,
    Path(course_id): Path<i32>,
    Json(body): Json<CoursePut>,
) -> ApiResult<Course> {
    body.validate()?;
    if body.id != course_id {
        return Err(ApiError::bad_request("path id does not match body id"));
    }
    let course = courses::update_course(&store, course_id, &body.into_update()).await?;
    Ok(ApiResponse::success(course))
}

/// PATCH /courses/:id - Merge the supplied fields into an existing course
pub async fn patch(
    State(store): State<Store>,
    Path(course_id): Path<i32>,
    Json(body): Json<CoursePatch>,
) -> ApiResult<Course> {
    body.validate()?;
    let existing = courses::get_course_by_id(&store, course_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("course {} not found", course_id)))?;
    let course = courses::update_course(&store, course_id, &body.merge(&existing)).await?;
    Ok(ApiResponse::success(course))
}

/// DELETE /courses/:id - Delete a course, returning the removed row
pub async fn remove(State(store): State<Store>, Path(course_id): Path<i32>) -> ApiResult<Course> {
    let course = courses::delete_course(&store, course_id).await?;
    Ok(ApiResponse::success(course))
}
