//! In-process store
//!
//! Used when no database is configured and by the HTTP tests. Ids are
//! assigned from 1 upwards like a `SERIAL` column, and a message for an
//! unknown group is rejected the same way the foreign key rejects it.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::models::{Group, Message};
use crate::store::{
    error::{Result, StoreError},
    GroupStore,
};

#[derive(Debug, Default)]
struct Tables {
    groups: Vec<Group>,
    messages: Vec<Message>,
    last_group_id: i32,
    last_message_id: i32,
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GroupStore for MemoryStore {
    async fn create_group(&self, group_name: String, token_amount: i64) -> Result<Group> {
        let mut tables = self.tables.write().await;
        let id = tables
            .last_group_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Database("groups id sequence exhausted".to_string()))?;
        tables.last_group_id = id;

        let group = Group {
            id,
            group_name,
            token_amount,
        };
        tables.groups.push(group.clone());
        Ok(group)
    }

    async fn get_all_groups(&self) -> Result<Vec<Group>> {
        Ok(self.tables.read().await.groups.clone())
    }

    async fn list_groups(&self, start_after: Option<i32>, limit: u32) -> Result<Vec<Group>> {
        let tables = self.tables.read().await;
        let lower_bound = start_after.unwrap_or(i32::MIN);

        Ok(tables
            .groups
            .iter()
            .filter(|group| group.id > lower_bound)
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn get_group(&self, group_id: i32) -> Result<Option<Group>> {
        let tables = self.tables.read().await;
        Ok(tables.groups.iter().find(|group| group.id == group_id).cloned())
    }

    async fn create_message(&self, content: String, group_id: i32) -> Result<Message> {
        let mut tables = self.tables.write().await;
        if !tables.groups.iter().any(|group| group.id == group_id) {
            return Err(StoreError::GroupNotFound(group_id));
        }

        let id = tables
            .last_message_id
            .checked_add(1)
            .ok_or_else(|| StoreError::Database("messages id sequence exhausted".to_string()))?;
        tables.last_message_id = id;

        let message = Message {
            id,
            content,
            group_id,
        };
        tables.messages.push(message.clone());
        Ok(message)
    }

    async fn get_messages_for_group(&self, group_id: i32) -> Result<Vec<Message>> {
        let tables = self.tables.read().await;
        Ok(tables
            .messages
            .iter()
            .filter(|message| message.group_id == group_id)
            .cloned()
            .collect())
    }
}
