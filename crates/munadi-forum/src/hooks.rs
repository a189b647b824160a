//! Creation hook bus
//!
//! The host fires a hook after a topic or reply is durably created.
//! Handlers return `Ok(true)` to ask the host to skip the creation; a
//! notification handler always returns `Ok(false)` so the creation flow
//! is never blocked by it.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use munadi_core::Result;
use tokio::sync::RwLock;

#[async_trait]
pub trait CreationHook: Send + Sync {
    async fn on_topic_created(&self, topic_id: i64) -> Result<bool>;
    async fn on_reply_created(&self, reply_id: i64) -> Result<bool>;
}

/// Registry of creation hooks, keyed by plugin name
#[derive(Default)]
pub struct HookBus {
    hooks: RwLock<HashMap<String, Arc<dyn CreationHook>>>,
}

impl HookBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_hook(&self, name: impl Into<String>, hook: Arc<dyn CreationHook>) {
        self.hooks.write().await.insert(name.into(), hook);
    }

    pub async fn remove_hook(&self, name: &str) {
        self.hooks.write().await.remove(name);
    }

    pub async fn hook_count(&self) -> usize {
        self.hooks.read().await.len()
    }

    /// Fire the topic-created hook point. Returns `Ok(true)` when any
    /// handler asks to skip the creation.
    pub async fn fire_topic_created(&self, topic_id: i64) -> Result<bool> {
        let hooks = self.registered().await;
        let mut skip = false;
        for hook in hooks {
            if hook.on_topic_created(topic_id).await? {
                skip = true;
            }
        }
        Ok(skip)
    }

    /// Fire the reply-created hook point. Returns `Ok(true)` when any
    /// handler asks to skip the creation.
    pub async fn fire_reply_created(&self, reply_id: i64) -> Result<bool> {
        let hooks = self.registered().await;
        let mut skip = false;
        for hook in hooks {
            if hook.on_reply_created(reply_id).await? {
                skip = true;
            }
        }
        Ok(skip)
    }

    // Snapshot the handlers so the lock is not held across handler awaits.
    async fn registered(&self) -> Vec<Arc<dyn CreationHook>> {
        self.hooks.read().await.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingHook {
        topics: AtomicUsize,
        replies: AtomicUsize,
        skip: bool,
    }

    impl CountingHook {
        fn new(skip: bool) -> Self {
            Self {
                topics: AtomicUsize::new(0),
                replies: AtomicUsize::new(0),
                skip,
            }
        }
    }

    #[async_trait]
    impl CreationHook for CountingHook {
        async fn on_topic_created(&self, _topic_id: i64) -> Result<bool> {
            self.topics.fetch_add(1, Ordering::SeqCst);
            Ok(self.skip)
        }

        async fn on_reply_created(&self, _reply_id: i64) -> Result<bool> {
            self.replies.fetch_add(1, Ordering::SeqCst);
            Ok(self.skip)
        }
    }

    #[tokio::test]
    async fn test_fire_reaches_registered_hooks() {
        let bus = HookBus::new();
        let hook = Arc::new(CountingHook::new(false));
        bus.add_hook("counter", hook.clone()).await;

        assert!(!bus.fire_topic_created(1).await.unwrap());
        assert!(!bus.fire_reply_created(2).await.unwrap());
        assert_eq!(hook.topics.load(Ordering::SeqCst), 1);
        assert_eq!(hook.replies.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_removed_hooks_are_not_fired() {
        let bus = HookBus::new();
        let hook = Arc::new(CountingHook::new(false));
        bus.add_hook("counter", hook.clone()).await;
        bus.remove_hook("counter").await;

        assert_eq!(bus.hook_count().await, 0);
        bus.fire_topic_created(1).await.unwrap();
        assert_eq!(hook.topics.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_skip_flag_is_aggregated() {
        let bus = HookBus::new();
        bus.add_hook("quiet", Arc::new(CountingHook::new(false)))
            .await;
        bus.add_hook("blocker", Arc::new(CountingHook::new(true)))
            .await;

        assert!(bus.fire_topic_created(1).await.unwrap());
    }
}
