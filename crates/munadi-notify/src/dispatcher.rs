//! Notification dispatcher
//!
//! Turns a creation event into at most one webhook delivery. Every
//! per-event failure is terminal and local: it is logged for the operator
//! and the triggering creation is never affected.

use std::sync::Arc;

use async_trait::async_trait;
use munadi_core::config::{DiscordConfig, PayloadStyle};
use munadi_core::types::{Embed, EmbedAuthor, ForumEvent, Site, Topic, User, WebhookPayload};
use munadi_core::utils::{generate_request_id, summarize};
use munadi_core::Result;
use munadi_forum::{CreationHook, ForumRepository};
use tracing::{debug, warn};

use crate::webhook::WebhookClient;

/// Transient per-event context: the originating topic, the authoring user,
/// and the text being summarized. Owned by one dispatch call.
struct NotificationContext {
    topic: Topic,
    author: User,
    content: String,
}

pub struct NotificationDispatcher {
    config: DiscordConfig,
    site: Site,
    forum: Arc<dyn ForumRepository>,
    client: WebhookClient,
}

impl NotificationDispatcher {
    pub fn new(config: DiscordConfig, site: Site, forum: Arc<dyn ForumRepository>) -> Self {
        Self {
            config,
            site,
            forum,
            client: WebhookClient::new(),
        }
    }

    /// Handle one creation event: filter, enrich, build and deliver.
    /// Best effort; never propagates an error to the caller.
    pub async fn dispatch(&self, event: ForumEvent) {
        let request_id = generate_request_id();
        let kind = event.kind();
        let id = event.entity_id();

        if !self.config.allows(kind) {
            debug!(
                "Skipping {} {} (event filter) request_id={}",
                kind, id, request_id
            );
            return;
        }

        let ctx = match self.resolve(event).await {
            Ok(Some(ctx)) => ctx,
            Ok(None) => {
                debug!(
                    "Dropping {} {}: entity or author not found request_id={}",
                    kind, id, request_id
                );
                return;
            }
            Err(e) => {
                warn!(
                    "Dropping {} {}: store error: {} request_id={}",
                    kind, id, e, request_id
                );
                return;
            }
        };

        if !self.config.allows_forum(ctx.topic.forum_id) {
            debug!(
                "Skipping {} {} (forum {} filtered) request_id={}",
                kind, id, ctx.topic.forum_id, request_id
            );
            return;
        }

        let payload = self.build_payload(&ctx);
        let body = match serde_json::to_string(&payload) {
            Ok(body) => body,
            Err(e) => {
                warn!(
                    "Failed to serialize payload for {} {}: {} request_id={}",
                    kind, id, e, request_id
                );
                return;
            }
        };

        match self.client.push(&self.config.webhook_url, body.clone()).await {
            Ok(response) => {
                debug!("Pushed {} {} to the webhook request_id={}", kind, id, request_id);
                debug!("Sent: {} request_id={}", body, request_id);
                debug!(
                    "Response: {} {} request_id={}",
                    response.status, response.body, request_id
                );
            }
            Err(e) => {
                warn!("Webhook delivery failed: {} request_id={}", e, request_id);
                warn!("Sent: {} request_id={}", body, request_id);
            }
        }
    }

    /// Resolve the entity and its author. `Ok(None)` means a lookup missed.
    async fn resolve(&self, event: ForumEvent) -> Result<Option<NotificationContext>> {
        let (topic, content, created_by) = match event {
            ForumEvent::TopicCreated { topic_id } => {
                let topic = match self.forum.get_topic(topic_id).await? {
                    Some(topic) => topic,
                    None => return Ok(None),
                };
                let content = topic.content.clone();
                let created_by = topic.created_by;
                (topic, content, created_by)
            }
            ForumEvent::ReplyCreated { reply_id } => {
                let reply = match self.forum.get_reply(reply_id).await? {
                    Some(reply) => reply,
                    None => return Ok(None),
                };
                let topic = match self.forum.get_topic(reply.topic_id).await? {
                    Some(topic) => topic,
                    None => return Ok(None),
                };
                (topic, reply.content, reply.created_by)
            }
        };

        let author = match self.forum.get_user(created_by).await? {
            Some(author) => author,
            None => return Ok(None),
        };

        Ok(Some(NotificationContext {
            topic,
            author,
            content,
        }))
    }

    fn build_payload(&self, ctx: &NotificationContext) -> WebhookPayload {
        let summary = summarize(&ctx.content);

        match self.config.style {
            PayloadStyle::Plain => WebhookPayload::plain(
                self.site.name.clone(),
                format!("{}: {}", ctx.topic.title, summary),
            ),
            PayloadStyle::Embed => {
                let author = EmbedAuthor {
                    name: ctx.author.name.clone(),
                    url: self.site.absolute_url(&ctx.author.link),
                    icon_url: self.site.absolute_url(&ctx.author.avatar),
                };
                let embed = Embed {
                    title: ctx.topic.title.clone(),
                    description: summary,
                    url: self.site.absolute_url(&ctx.topic.link),
                    author,
                };
                WebhookPayload::embed(self.site.name.clone(), embed)
            }
        }
    }
}

// The hook contract: never skip the creation, never surface an error.
#[async_trait]
impl CreationHook for NotificationDispatcher {
    async fn on_topic_created(&self, topic_id: i64) -> Result<bool> {
        self.dispatch(ForumEvent::TopicCreated { topic_id }).await;
        Ok(false)
    }

    async fn on_reply_created(&self, reply_id: i64) -> Result<bool> {
        self.dispatch(ForumEvent::ReplyCreated { reply_id }).await;
        Ok(false)
    }
}
