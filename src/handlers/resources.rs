use axum::extract::{Path, State};
use axum::Json;

use crate::error::ApiError;
use crate::response::{ApiResponse, ApiResult};
use crate::store::models::resource::{Resource, ResourceCreate, ResourcePut};
use crate::store::{resources, Store};

/// POST /resources - Attach a resource to a course or lesson
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<ResourceCreate>,
) -> ApiResult<Resource> {
    body.validate()?;
    let resource = resources::create_resource(&store, &body).await?;
    Ok(ApiResponse::created(resource))
}

/// GET /resources/:id - Get a single resource by id
pub async fn get(State(store): State<Store>, Path(resource_id): Path<i32>) -> ApiResult<Resource> {
    match resources::get_resource_by_id(&store, resource_id).await? {
        Some(resource) => Ok(ApiResponse::success(resource)),
        None => Err(ApiError::not_found(format!(
            "resource {} not found",
            resource_id
        ))),
    }
}

/// GET /courses/:id/resources - List resources for a course
pub async fn list_by_course(
    State(store): State<Store>,
    Path(course_id): Path<i32>,
) -> ApiResult<Vec<Resource>> {
    let resources = resources::get_resources_by_course(&store, course_id).await?;
    Ok(ApiResponse::success(resources))
}

/// GET /lessons/:id/resources - List resources for a lesson
pub async fn list_by_lesson(
    State(store): State<Store>,
    Path(lesson_id): Path<i32>,
) -> ApiResult<Vec<Resource>> {
    let resources = resources::get_resources_by_lesson(&store, lesson_id).await?;
    Ok(ApiResponse::success(resources))
}

/// PUT /resources/:id - Replace all mutable resource fields
pub async fn put(
    State(store): State<Store>,
    Path(resource_id): Path<i32>,
    Json(body): Json<ResourcePut>,
) -> ApiResult<Resource> {
    body.validate()?;
    if body.id != resource_id {
        return Err(ApiError::bad_request("path id does not match body id"));
    }
    let resource = resources::update_resource(&store, resource_id, &body.into_update()).await?;
    Ok(ApiResponse::success(resource))
}

/// DELETE /resources/:id - Delete a resource, returning the removed row
pub async fn remove(
    State(store): State<Store>,
    Path(resource_id): Path<i32>,
) -> ApiResult<Resource> {
    let resource = resources::delete_resource(&store, resource_id).await?;
    Ok(ApiResponse::success(resource))
}
