// Message handlers: /createMessage, /getMessagesForGroup/{groupId}

use tracing::info;

use super::parse_group_id;
use super::rejection::store_rejection;
use crate::models::{CreateMessageRequest, MessageCreatedResponse};
use crate::store::SharedStore;

pub async fn create_message_handler(
    store: SharedStore,
    request: CreateMessageRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    info!("POST /createMessage: group {}", request.group_id);

    let new_message = store
        .create_message(request.content, request.group_id)
        .await
        .map_err(store_rejection)?;

    Ok(warp::reply::json(&MessageCreatedResponse {
        message: "Message created".to_string(),
        new_message,
    }))
}

pub async fn get_messages_for_group_handler(
    raw_group_id: String,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    info!("GET /getMessagesForGroup/{}", raw_group_id);

    let group_id = parse_group_id(&raw_group_id)?;
    let messages = store
        .get_messages_for_group(group_id)
        .await
        .map_err(store_rejection)?;
    Ok(warp::reply::json(&messages))
}
