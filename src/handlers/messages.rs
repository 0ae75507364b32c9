use axum::extract::{Path, State};
use axum::Json;

use crate::response::{ApiResponse, ApiResult};
use crate::store::models::message::{Message, MessageCreate};
use crate::store::{messages, Store};

/// POST /messages - Send a message between two users
pub async fn create(
    State(store): State<Store>,
    Json(body): Json<MessageCreate>,
) -> ApiResult<Message> {
    body.validate()?;
    let message = messages::create_message(&store, &body).await?;
    Ok(ApiResponse::created(message))
}

/// GET /messages/:user_a/:user_b - Conversation between two users in send
/// order, regardless of direction. An empty conversation is a valid empty
/// list, matching every other listing endpoint.
pub async fn conversation(
    State(store): State<Store>,
    Path((user_a, user_b)): Path<(i32, i32)>,
) -> ApiResult<Vec<Message>> {
    let messages = messages::get_messages_between_users(&store, user_a, user_b).await?;
    Ok(ApiResponse::success(messages))
}
