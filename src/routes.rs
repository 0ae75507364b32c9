use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    assignments, attendance, courses, enrollments, lessons, messages, resources, submissions,
    users,
};
use crate::store::Store;

/// Build the full application router around a store handle
pub fn app(store: Store) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(user_routes())
        .merge(course_routes())
        .merge(lesson_routes())
        .merge(enrollment_routes())
        .merge(assignment_routes())
        .merge(submission_routes())
        .merge(message_routes())
        .merge(resource_routes())
        .merge(attendance_routes())
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(store)
}

fn user_routes() -> Router<Store> {
    Router::new()
        .route("/users", post(users::create).get(users::list))
        .route(
            "/users/:id",
            get(users::get)
                .put(users::put)
                .patch(users::patch)
                .delete(users::remove),
        )
        .route("/users/:id/enrollments", get(enrollments::list_by_user))
}

fn course_routes() -> Router<Store> {
    Router::new()
        .route("/courses", post(courses::create))
        .route(
            "/courses/:id",
            get(courses::get)
                .put(courses::put)
                .patch(courses::patch)
                .delete(courses::remove),
        )
        .route("/teachers/:id/courses", get(courses::list_by_teacher))
        .route("/courses/:id/lessons", get(lessons::list_by_course))
        .route("/courses/:id/assignments", get(assignments::list_by_course))
        .route("/courses/:id/resources", get(resources::list_by_course))
}

fn lesson_routes() -> Router<Store> {
    Router::new()
        .route("/lessons", post(lessons::create))
        .route(
            "/lessons/:id",
            get(lessons::get).put(lessons::put).delete(lessons::remove),
        )
        .route("/lessons/:id/resources", get(resources::list_by_lesson))
        .route("/lessons/:id/attendance", get(attendance::list_by_lesson))
}

fn enrollment_routes() -> Router<Store> {
    Router::new()
        .route("/enrollments", post(enrollments::create))
        .route(
            "/enrollments/:id",
            get(enrollments::get).delete(enrollments::remove),
        )
}

fn assignment_routes() -> Router<Store> {
    Router::new()
        .route("/assignments", post(assignments::create))
        .route(
            "/assignments/:id",
            get(assignments::get)
                .put(assignments::put)
                .patch(assignments::patch)
                .delete(assignments::remove),
        )
        .route(
            "/assignments/:id/submissions",
            get(submissions::list_by_assignment),
        )
}

fn submission_routes() -> Router<Store> {
    Router::new()
        .route("/submissions", post(submissions::create))
        .route(
            "/submissions/:id",
            get(submissions::get).delete(submissions::remove),
        )
        .route("/submissions/:id/grade", put(submissions::grade))
        .route(
            "/students/:id/submissions",
            get(submissions::list_by_student),
        )
        .route("/students/:id/attendance", get(attendance::list_by_student))
}

fn message_routes() -> Router<Store> {
    Router::new()
        .route("/messages", post(messages::create))
        .route("/messages/:user_a/:user_b", get(messages::conversation))
}

fn resource_routes() -> Router<Store> {
    Router::new()
        .route("/resources", post(resources::create))
        .route(
            "/resources/:id",
            get(resources::get)
                .put(resources::put)
                .delete(resources::remove),
        )
}

fn attendance_routes() -> Router<Store> {
    Router::new()
        .route("/attendance", post(attendance::create))
        .route(
            "/attendance/:id",
            get(attendance::get)
                .put(attendance::put)
                .delete(attendance::remove),
        )
}

async fn index() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Classroom API",
            "version": version,
            "resources": [
                "/users", "/courses", "/lessons", "/enrollments", "/assignments",
                "/submissions", "/messages", "/resources", "/attendance"
            ]
        }
    }))
}

async fn health(State(store): State<Store>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match store.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
