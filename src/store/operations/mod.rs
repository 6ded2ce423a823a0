pub mod groups;
pub mod messages;

pub use groups::{create_group, get_all_groups, get_group, list_groups};
pub use messages::{create_message, get_messages_for_group};
