use super::models::submission::{GradeUpdate, Submission, SubmissionCreate};
use super::{Store, StoreError};

pub async fn create_submission(
    store: &Store,
    new: &SubmissionCreate,
) -> Result<Submission, StoreError> {
    let mut tx = store.pool().begin().await?;
    let submission = sqlx::query_as::<_, Submission>(
        "INSERT INTO submissions (assignment_id, student_id, url)
         VALUES ($1, $2, $3)
         RETURNING *",
    )
    .bind(new.assignment_id)
    .bind(new.student_id)
    .bind(&new.url)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "submission creation failed"))?;
    tx.commit().await?;
    Ok(submission)
}

pub async fn get_submission_by_id(
    store: &Store,
    submission_id: i32,
) -> Result<Option<Submission>, StoreError> {
    let submission = sqlx::query_as::<_, Submission>("SELECT * FROM submissions WHERE id = $1")
        .bind(submission_id)
        .fetch_optional(store.pool())
        .await?;
    Ok(submission)
}

pub async fn get_submissions_by_assignment(
    store: &Store,
    assignment_id: i32,
) -> Result<Vec<Submission>, StoreError> {
    let submissions = sqlx::query_as::<_, Submission>(
        "SELECT * FROM submissions WHERE assignment_id = $1 ORDER BY submitted_at",
    )
    .bind(assignment_id)
    .fetch_all(store.pool())
    .await?;
    Ok(submissions)
}

pub async fn get_submissions_by_student(
    store: &Store,
    student_id: i32,
) -> Result<Vec<Submission>, StoreError> {
    let submissions = sqlx::query_as::<_, Submission>(
        "SELECT * FROM submissions WHERE student_id = $1 ORDER BY submitted_at",
    )
    .bind(student_id)
    .fetch_all(store.pool())
    .await?;
    Ok(submissions)
}

/// Restricted partial update: only grade and feedback may change through
/// this statement.
pub async fn update_submission_grade(
    store: &Store,
    submission_id: i32,
    update: &GradeUpdate,
) -> Result<Submission, StoreError> {
    let mut tx = store.pool().begin().await?;
    let submission = sqlx::query_as::<_, Submission>(
        "UPDATE submissions
         SET grade = $2, feedback = $3
         WHERE id = $1
         RETURNING *",
    )
    .bind(submission_id)
    .bind(&update.grade)
    .bind(&update.feedback)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "submission grading failed"))?
    .ok_or_else(|| StoreError::NotFound(format!("submission {} not found", submission_id)))?;
    tx.commit().await?;
    Ok(submission)
}

pub async fn delete_submission(
    store: &Store,
    submission_id: i32,
) -> Result<Submission, StoreError> {
    let mut tx = store.pool().begin().await?;
    let submission =
        sqlx::query_as::<_, Submission>("DELETE FROM submissions WHERE id = $1 RETURNING *")
            .bind(submission_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| StoreError::from_write(e, "submission delete failed"))?
            .ok_or_else(|| StoreError::NotFound(format!("submission {} not found", submission_id)))?;
    tx.commit().await?;
    Ok(submission)
}
