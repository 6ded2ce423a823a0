// Handlers module

pub mod body;
pub mod groups;
pub mod health;
pub mod messages;
pub mod rejection;

pub use body::json_body;
pub use groups::{all_groups_handler, create_group_handler, get_group_handler, group_list_handler};
pub use health::health_handler;
pub use messages::{create_message_handler, get_messages_for_group_handler};
pub use rejection::{handle_rejection, ApiError};

/// Parse a `:groupId` path segment.
///
/// Anything that is not an `i32` is rejected with `ApiError::InvalidGroupId`
/// before the store is touched.
pub(crate) fn parse_group_id(raw: &str) -> Result<i32, warp::Rejection> {
    raw.trim()
        .parse::<i32>()
        .map_err(|_| warp::reject::custom(ApiError::InvalidGroupId(raw.to_string())))
}
