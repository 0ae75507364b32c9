use super::models::attendance::{Attendance, AttendanceCreate, AttendanceUpdate};
use super::{Store, StoreError};

pub async fn create_attendance(
    store: &Store,
    new: &AttendanceCreate,
) -> Result<Attendance, StoreError> {
    let mut tx = store.pool().begin().await?;
    let attendance = sqlx::query_as::<_, Attendance>(
        "INSERT INTO attendance (lesson_id, student_id, status, url)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(new.lesson_id)
    .bind(new.student_id)
    .bind(&new.status)
    .bind(&new.url)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "attendance creation failed"))?;
    tx.commit().await?;
    Ok(attendance)
}

pub async fn get_attendance_by_id(
    store: &Store,
    attendance_id: i32,
) -> Result<Option<Attendance>, StoreError> {
    let attendance = sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = $1")
        .bind(attendance_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(attendance)
}

pub async fn get_attendance_by_lesson(
    store: &Store,
    lesson_id: i32,
) -> Result<Vec<Attendance>, StoreError> {
    let attendance =
        sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE lesson_id = $1 ORDER BY id")
            .bind(lesson_id)
            .fetch_all(store.pool())
            .await?;
    Ok(attendance)
}

pub async fn get_attendance_by_student(
    store: &Store,
    student_id: i32,
) -> Result<Vec<Attendance>, StoreError> {
    let attendance = sqlx::query_as::<_, Attendance>(
        "SELECT * FROM attendance WHERE student_id = $1 ORDER BY recorded_at",
    )
    .bind(student_id)
    .fetch_all(store.pool())
    .await?;
    Ok(attendance)
}

pub async fn update_attendance(
    store: &Store,
    attendance_id: i32,
    update: &AttendanceUpdate,
) -> Result<Attendance, StoreError> {
    let mut tx = store.pool().begin().await?;
    let attendance = sqlx::query_as::<_, Attendance>(
        "UPDATE attendance
         SET lesson_id = $2, student_id = $3, status = $4, url = $5,
             recorded_at = $6, uploaded_at = $7
         WHERE id = $1
         RETURNING *",
    )
    .bind(attendance_id)
    .bind(update.lesson_id)
    .bind(update.student_id)
    .bind(&update.status)
    .bind(&update.url)
    .bind(update.recorded_at)
    .bind(update.uploaded_at)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "attendance update failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("attendance record {} not found", attendance_id)))?;
    tx.commit().await?;
    Ok(attendance)
}

pub async fn delete_attendance(
    store: &Store,
    attendance_id: i32,
) -> Result<Attendance, StoreError> {
    let mut tx = store.pool().begin().await?;
    let attendance =
        sqlx::query_as::<_, Attendance>("DELETE FROM attendance WHERE id = $1 RETURNING *")
            .bind(attendance_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StoreError::from_write(e, "attendance delete failed"))?
            .ok_or_else(|| {
                StoreError::NotFound(format!("attendance record {} not found", attendance_id))
            })?;
    tx.commit().await?;
    Ok(attendance)
}
