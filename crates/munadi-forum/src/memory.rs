//! In-memory forum store
//!
//! Backs the test suites and the CLI. Mirrors the shape of the host's
//! real stores: lookup by id, `None` for missing records.

use std::collections::HashMap;

use async_trait::async_trait;
use munadi_core::types::{Reply, Topic, User};
use munadi_core::Result;
use tokio::sync::RwLock;

use crate::traits::ForumRepository;

#[derive(Default)]
pub struct InMemoryForum {
    topics: RwLock<HashMap<i64, Topic>>,
    replies: RwLock<HashMap<i64, Reply>>,
    users: RwLock<HashMap<i64, User>>,
}

impl InMemoryForum {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_topic(&self, topic: Topic) {
        self.topics.write().await.insert(topic.id, topic);
    }

    pub async fn insert_reply(&self, reply: Reply) {
        self.replies.write().await.insert(reply.id, reply);
    }

    pub async fn insert_user(&self, user: User) {
        self.users.write().await.insert(user.id, user);
    }
}

#[async_trait]
impl ForumRepository for InMemoryForum {
    async fn get_topic(&self, id: i64) -> Result<Option<Topic>> {
        Ok(self.topics.read().await.get(&id).cloned())
    }

    async fn get_reply(&self, id: i64) -> Result<Option<Reply>> {
        Ok(self.replies.read().await.get(&id).cloned())
    }

    async fn get_user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[tokio::test]
    async fn test_lookup_roundtrip() {
        let forum = InMemoryForum::new();
        forum
            .insert_topic(Topic {
                id: 42,
                forum_id: 1,
                title: "Hello".to_string(),
                content: "World".to_string(),
                link: "/t/42".to_string(),
                created_by: 1,
                created_at: Utc::now(),
            })
            .await;

        let topic = forum.get_topic(42).await.unwrap().unwrap();
        assert_eq!(topic.title, "Hello");
        assert!(forum.get_topic(99).await.unwrap().is_none());
        assert!(forum.get_user(1).await.unwrap().is_none());
    }
}
