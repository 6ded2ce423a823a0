use deadpool_postgres::Pool;
use tokio_postgres::error::SqlState;
use tokio_postgres::Row;

use crate::models::Message;
use crate::store::error::{Result, StoreError};

pub(crate) fn parse_message_row(row: &Row) -> Result<Message> {
    Ok(Message {
        id: row.try_get("id")?,
        content: row.try_get("content")?,
        group_id: row.try_get("group_id")?,
    })
}

/// Insert a message for a group
///
/// The group is not looked up first. If the foreign key on `messages.group_id`
/// rejects the row, the failure surfaces as [`StoreError::GroupNotFound`].
///
/// # Errors
///
/// * `StoreError::GroupNotFound` - No group with `group_id` exists
/// * `StoreError::Database` - Any other SQL or connection failure
pub async fn create_message(pool: &Pool, content: &str, group_id: i32) -> Result<Message> {
    let conn = pool.get().await?;

    let result = conn
        .query_one(
            "INSERT INTO messages (content, group_id) VALUES ($1, $2) \
             RETURNING id, content, group_id",
            &[&content, &group_id],
        )
        .await;

    match result {
        Ok(row) => parse_message_row(&row),
        Err(e) if e.code() == Some(&SqlState::FOREIGN_KEY_VIOLATION) => {
            Err(StoreError::GroupNotFound(group_id))
        }
        Err(e) => Err(e.into()),
    }
}

/// Retrieve the messages of one group, ordered by id
pub async fn get_messages_for_group(pool: &Pool, group_id: i32) -> Result<Vec<Message>> {
    let conn = pool.get().await?;

    let rows = conn
        .query(
            "SELECT id, content, group_id FROM messages WHERE group_id = $1 ORDER BY id",
            &[&group_id],
        )
        .await?;

    rows.iter().map(parse_message_row).collect()
}
