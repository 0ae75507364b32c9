use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::lesson::{Lesson, LessonCreate, LessonPut};
use crate::store::{lessons, Store};

/// POST /lessons - Create a new lesson
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<LessonCreate>,
) -> ApiResult<Lesson> {
    body.validate()?;
    let lesson = lessons::create_lesson(&store, &body).await?;
    Ok(ApiResponse::created(lesson))
}

/// GET /lessons/:id - Get a single lesson by id
pub async fn get(State(store): State<Store>, Path(lesson_id): Path<i32>) -> ApiResult<Lesson> {
    match lessons::get_lesson_by_id(&store, lesson_id).await? {
        Some(lesson) => Ok(ApiResponse::success(lesson)),
        None => Err(ApiError::not_found(format!("lesson {} not found", lesson_id))),
    }
}

/// GET /courses/:id/lessons - List lessons for a course in schedule order
pub async fn list_by_course(
    State(store): State<Store>,
    Path(course_id): Path<i32>,
) -> ApiResult<Vec<Lesson>> {
    let lessons = lessons::get_lessons_by_course(&store, course_id).await?;
    Ok(ApiResponse::success(lessons))
}

/// PUT /lessons/:id - Replace all mutable lesson fields
pub async fn put(
    State(store): State<Store>,
    Path(lesson_id): Path<i32>,
    Json(body): Json<LessonPut>,
) -> ApiResult<Lesson> {
    body.validate()?;
    if body.id != lesson_id {
        return Err(ApiError::bad_request("path id does not match body id"));
    }
    let lesson = lessons::update_lesson(&store, lesson_id, &body.into_update()).await?;
    Ok(ApiResponse::success(lesson))
}

/// DELETE /lessons/:id - Delete a lesson, returning the removed row
pub async fn remove(State(store): State<Store>, Path(lesson_id): Path<i32>) -> ApiResult<Lesson> {
    let lesson = lessons::delete_lesson(&store, lesson_id).await?;
    Ok(ApiResponse::success(lesson))
}
