// Group handlers: /allGroups, /createGroup, /getGroup/{groupId}, /groupList

use tracing::info;

use super::parse_group_id;
use super::rejection::store_rejection;
use crate::models::{CreateGroupRequest, GroupCreatedResponse, GroupListQuery, GroupListResponse};
use crate::store::SharedStore;

/// Page size of `/groupList` when no limit is given
pub const DEFAULT_LIMIT: u32 = 10;
/// Upper bound on the page size of `/groupList`
pub const MAX_LIMIT: u32 = 30;

pub async fn all_groups_handler(store: SharedStore) -> Result<impl warp::Reply, warp::Rejection> {
    info!("GET /allGroups");

    let groups = store.get_all_groups().await.map_err(store_rejection)?;
    Ok(warp::reply::json(&groups))
}

pub async fn create_group_handler(
    store: SharedStore,
    request: CreateGroupRequest,
) -> Result<impl warp::Reply, warp::Rejection> {
    info!("POST /createGroup: {}", request.group_name);

    let new_group = store
        .create_group(request.group_name, request.token_amount)
        .await
        .map_err(store_rejection)?;

    Ok(warp::reply::json(&GroupCreatedResponse {
        message: "Group created".to_string(),
        new_group,
    }))
}

/// Replies with the group, or `null` when no group has that id.
pub async fn get_group_handler(
    raw_group_id: String,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    info!("GET /getGroup/{}", raw_group_id);

    let group_id = parse_group_id(&raw_group_id)?;
    let group = store.get_group(group_id).await.map_err(store_rejection)?;
    Ok(warp::reply::json(&group))
}

pub async fn group_list_handler(
    query: GroupListQuery,
    store: SharedStore,
) -> Result<impl warp::Reply, warp::Rejection> {
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    info!("GET /groupList: start_after={:?} limit={}", query.start_after, limit);

    let groups = store
        .list_groups(query.start_after, limit)
        .await
        .map_err(store_rejection)?;
    Ok(warp::reply::json(&GroupListResponse { groups }))
}
