// Records and request/response bodies

use serde::{Deserialize, Deserializer, Serialize};

// Group Struct
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: i32,
    pub group_name: String,
    pub token_amount: i64,
}

// Message Struct
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: i32,
    pub content: String,
    pub group_id: i32,
}

// Request Types
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateGroupRequest {
    pub group_name: String,
    pub token_amount: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMessageRequest {
    pub content: String,
    #[serde(deserialize_with = "deserialize_group_id")]
    pub group_id: i32,
}

/// Query string for `GET /groupList`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupListQuery {
    pub start_after: Option<i32>,
    pub limit: Option<u32>,
}

// Response Types
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupCreatedResponse {
    pub message: String,
    pub new_group: Group,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageCreatedResponse {
    pub message: String,
    pub new_message: Message,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupListResponse {
    pub groups: Vec<Group>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Accept `groupId` either as a JSON number or as a numeric string.
fn deserialize_group_id<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawGroupId {
        Number(i32),
        Text(String),
    }

    match RawGroupId::deserialize(deserializer)? {
        RawGroupId::Number(id) => Ok(id),
        RawGroupId::Text(text) => text
            .trim()
            .parse::<i32>()
            .map_err(|_| serde::de::Error::custom(format!("invalid groupId: {}", text))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_group_serialization_uses_camel_case() {
        let group = Group {
            id: 1,
            group_name: "Cosmunity".to_string(),
            token_amount: 1907,
        };
        let value = serde_json::to_value(&group).unwrap();
        assert_eq!(value, json!({"id": 1, "groupName": "Cosmunity", "tokenAmount": 1907}));
    }

    #[test]
    fn test_message_serialization_uses_camel_case() {
        let message = Message {
            id: 3,
            content: "gm".to_string(),
            group_id: 1,
        };
        let value = serde_json::to_value(&message).unwrap();
        assert_eq!(value, json!({"id": 3, "content": "gm", "groupId": 1}));
    }

    #[test]
    fn test_create_group_request_deserialization() {
        let json = r#"{"groupName":"Alpha","tokenAmount":10}"#;
        let request: CreateGroupRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.group_name, "Alpha");
        assert_eq!(request.token_amount, 10);
    }

    #[test]
    fn test_create_group_request_missing_field() {
        let json = r#"{"groupName":"Alpha"}"#;
        assert!(serde_json::from_str::<CreateGroupRequest>(json).is_err());
    }

    #[test]
    fn test_create_message_request_numeric_group_id() {
        let json = r#"{"content":"hello","groupId":7}"#;
        let request: CreateMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.content, "hello");
        assert_eq!(request.group_id, 7);
    }

    #[test]
    fn test_create_message_request_string_group_id() {
        let json = r#"{"content":"hello","groupId":" 12 "}"#;
        let request: CreateMessageRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.group_id, 12);
    }

    #[test]
    fn test_create_message_request_invalid_group_id() {
        let json = r#"{"content":"hello","groupId":"abc"}"#;
        assert!(serde_json::from_str::<CreateMessageRequest>(json).is_err());

        let json = r#"{"content":"hello","groupId":true}"#;
        assert!(serde_json::from_str::<CreateMessageRequest>(json).is_err());
    }

    #[test]
    fn test_group_created_response_shape() {
        let response = GroupCreatedResponse {
            message: "Group created".to_string(),
            new_group: Group {
                id: 1,
                group_name: "Alpha".to_string(),
                token_amount: 10,
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Group created");
        assert_eq!(value["newGroup"]["groupName"], "Alpha");
    }

    #[test]
    fn test_message_created_response_shape() {
        let response = MessageCreatedResponse {
            message: "Message created".to_string(),
            new_message: Message {
                id: 2,
                content: "hi".to_string(),
                group_id: 1,
            },
        };
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["message"], "Message created");
        assert_eq!(value["newMessage"]["groupId"], 1);
    }

    #[test]
    fn test_group_list_query_defaults() {
        let query: GroupListQuery = serde_json::from_str("{}").unwrap();
        assert!(query.start_after.is_none());
        assert!(query.limit.is_none());
    }
}
