use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::attendance::{Attendance, AttendanceCreate, AttendancePut};
use crate::store::{attendance, Store};

/// POST /attendance - Record attendance for a lesson
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<AttendanceCreate>,
) -> ApiResult<Attendance> {
    body.validate()?;
    let record = attendance::create_attendance(&store, &body).await?;
    Ok(ApiResponse::created(record))
}

/// GET /attendance/:id - Get a single attendance record by id
pub async fn get(
    State(store): State<Store>,
    Path(attendance_id): Path<i32>,
) -> ApiResult<Attendance> {
    match attendance::get_attendance_by_id(&store, attendance_id).await? {
        Some(record) => Ok(ApiResponse::success(record)),
        None => Err(ApiError::not_found(format!(
            "attendance record {} not found",
            attendance_id
        ))),
    }
}

/// GET /lessons/:id/attendance - List attendance records for a lesson
pub async fn list_by_lesson(
    State(store): State<Store>,
    Path(lesson_id): Path<i32>,
) -> ApiResult<Vec<Attendance>> {
    let records = attendance::get_attendance_by_lesson(&store, lesson_id).await?;
    Ok(ApiResponse::success(records))
}

/// GET /students/:id/attendance - List a student's attendance records
pub async fn list_by_student(
    State(store): State<Store>,
    Path(student_id): Path<i32>,
) -> ApiResult<Vec<Attendance>> {
    let records = attendance::get_attendance_by_student(&store, student_id).await?;
    Ok(ApiResponse::success(records))
}

/// PUT /attendance/:id - Replace all mutable attendance fields
pub async fn put(
    State(store): State<Store>,
    Path(attendance_id): Path<i32>,
    Json(body): Json<AttendancePut>,
) -> ApiResult<Attendance> {
    body.validate()?;
    if body.id != attendance_id {
        return Err(ApiError::bad_request("path id does not match body id"));
    }
    let record = attendance::update_attendance(&store, attendance_id, &body.into_update()).await?;
    Ok(ApiResponse::success(record))
}

/// DELETE /attendance/:id - Delete an attendance record, returning the
/// removed row
pub async fn remove(
    State(store): State<Store>,
    Path(attendance_id): Path<i32>,
) -> ApiResult<Attendance> {
    let record = attendance::delete_attendance(&store, attendance_id).await?;
    Ok(ApiResponse::success(record))
}
