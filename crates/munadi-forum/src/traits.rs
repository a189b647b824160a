//! Forum data accessor trait
//!
//! Defines the host-owned lookups the notifier depends on. Lookups return
//! `Ok(None)` for missing records and `Err` for backing-store failures.

use async_trait::async_trait;
use munadi_core::types::{Reply, Topic, User};
use munadi_core::Result;

#[async_trait]
pub trait ForumRepository: Send + Sync {
    async fn get_topic(&self, id: i64) -> Result<Option<Topic>>;
    async fn get_reply(&self, id: i64) -> Result<Option<Reply>>;
    async fn get_user(&self, id: i64) -> Result<Option<User>>;
}
