//! Request validation paths. These requests are rejected before any query
//! runs, so the router is exercised in-process over a lazy pool with no
//! database behind it.

use anyhow::Result;
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use classroom_api::config::DatabaseConfig;
use classroom_api::routes::app;
use classroom_api::store::Store;

fn test_app() -> axum::Router {
    let store = Store::connect_lazy(&DatabaseConfig::default()).expect("lazy pool");
    app(store)
}

async fn send(method: Method, uri: &str, body: Value) -> Result<(StatusCode, Value)> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))?;

    let response = test_app().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value: Value = serde_json::from_slice(&bytes)?;
    Ok((status, value))
}

#[tokio::test]
async fn create_user_rejects_unknown_role() -> Result<()> {
    let (status, body) = send(
        Method::POST,
        "/users",
        json!({
            "username": "amara",
            "email": "amara@example.com",
            "role": "principal",
            "password": "longenough"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR", "body: {}", body);
    assert!(
        body["field_errors"]["role"].is_string(),
        "expected role field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn create_user_rejects_short_password() -> Result<()> {
    let (status, body) = send(
        Method::POST,
        "/users",
        json!({
            "username": "amara",
            "email": "amara@example.com",
            "role": "student",
            "password": "short"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["field_errors"]["password"].is_string(),
        "expected password field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn create_user_rejects_malformed_email() -> Result<()> {
    let (status, body) = send(
        Method::POST,
        "/users",
        json!({
            "username": "amara",
            "email": "not-an-email",
            "role": "student",
            "password": "longenough"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["field_errors"]["email"].is_string(),
        "expected email field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn record_attendance_rejects_unknown_status() -> Result<()> {
    let (status, body) = send(
        Method::POST,
        "/attendance",
        json!({
            "lesson_id": 1,
            "student_id": 2,
            "status": "excused"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["field_errors"]["status"].is_string(),
        "expected status field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn replace_course_rejects_id_mismatch() -> Result<()> {
    let (status, body) = send(
        Method::PUT,
        "/courses/5",
        json!({
            "id": 6,
            "title": "Algebra II",
            "description": null,
            "teacher_id": 1,
            "start_date": "2026-09-01",
            "end_date": "2026-12-18"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "BAD_REQUEST", "body: {}", body);
    Ok(())
}

#[tokio::test]
async fn send_message_rejects_blank_content() -> Result<()> {
    let (status, body) = send(
        Method::POST,
        "/messages",
        json!({
            "sender_id": 1,
            "receiver_id": 2,
            "content": "   "
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["field_errors"]["content"].is_string(),
        "expected content field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn grade_submission_rejects_oversized_grade() -> Result<()> {
    let (status, body) = send(
        Method::PUT,
        "/submissions/7/grade",
        json!({
            "grade": "a grade label well past twenty characters",
            "feedback": "over the top"
        }),
    )
    .await?;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        body["field_errors"]["grade"].is_string(),
        "expected grade field error: {}",
        body
    );
    Ok(())
}

#[tokio::test]
async fn service_index_lists_resources() -> Result<()> {
    let request = Request::builder()
        .method(Method::GET)
        .uri("/")
        .body(Body::empty())?;

    let response = test_app().oneshot(request).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let body: Value = serde_json::from_slice(&bytes)?;
    assert_eq!(body["success"], true, "body: {}", body);
    let resources = body["data"]["resources"]
        .as_array()
        .expect("resources array");
    assert!(resources.iter().any(|v| v == "/attendance"));
    Ok(())
}
