use super::models::message::{Message, MessageCreate};
use super::{Store, StoreError};

pub async fn create_message(store: &Store, new: &MessageCreate) -> Result<Message, StoreError> {
    let mut tx = store.pool().begin().await?;
    let message = sqlx::query_as::<_, Message>(
        "INSERT INTO messages (sender_id, receiver_id, course_id, content)
         VALUES ($1, $2, $3, $4)
         RETURNING *",
    )
    .bind(new.sender_id)
    .bind(new.receiver_id)
    .bind(new.course_id)
    .bind(&new.content)
    .fetch_one(&mut *tx)
    .await
    .map_err(|e| StoreError::from_write(e, "message creation failed"))?;
    tx.commit().await?;
    Ok(message)
}

/// The conversation view is undirected: messages where the pair matches
/// in either direction, oldest first.
pub async fn get_messages_between_users(
    store: &Store,
    user_a: i32,
    user_b: i32,
) -> Result<Vec<Message>, StoreError> {
    let messages = sqlx::query_as::<_, Message>(
        "SELECT * FROM messages
         WHERE (sender_id = $1 AND receiver_id = $2)
            OR (sender_id = $2 AND receiver_id = $1)
         ORDER BY sent_at",
    )
    .bind(user_a)
    .bind(user_b)
    .fetch_all(store.pool())
    .await?;
    Ok(messages)
}
