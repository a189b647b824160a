//! Plugin configuration
//!
//! Settings arrive from the host forum as a flat string-to-string map
//! populated from its configuration file. They are parsed once into an
//! immutable `DiscordConfig` at plugin setup and read-only thereafter.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};
use crate::types::EventKind;

/// Settings key for the webhook URL (required)
pub const WEBHOOK_KEY: &str = "DiscordWebhook";

/// Settings key for the event filter (optional)
pub const EVENTS_KEY: &str = "DiscordEvents";

/// Settings key for the forum filter (optional)
pub const FORUMS_KEY: &str = "DiscordForums";

/// Settings key for the payload style (optional)
pub const STYLE_KEY: &str = "DiscordStyle";

/// Which creation events are pushed to the webhook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EventFilter {
    #[default]
    All,
    ThreadsOnly,
    RepliesOnly,
}

impl EventFilter {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "" => Ok(EventFilter::All),
            "threads" => Ok(EventFilter::ThreadsOnly),
            "replies" => Ok(EventFilter::RepliesOnly),
            other => Err(Error::InvalidEventFilter(other.to_string())),
        }
    }

    /// Check if an event kind passes the filter
    pub fn allows(&self, kind: EventKind) -> bool {
        match self {
            EventFilter::All => true,
            EventFilter::ThreadsOnly => kind == EventKind::Topic,
            EventFilter::RepliesOnly => kind == EventKind::Reply,
        }
    }
}

/// Shape of the outbound payload
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PayloadStyle {
    /// Rich embed with title, summary, permalink and author block
    #[default]
    Embed,
    /// Single content string
    Plain,
}

impl PayloadStyle {
    pub fn parse(raw: &str) -> Result<Self> {
        match raw {
            "" | "embed" => Ok(PayloadStyle::Embed),
            "plain" => Ok(PayloadStyle::Plain),
            other => Err(Error::InvalidPayloadStyle(other.to_string())),
        }
    }
}

/// Validated, immutable plugin configuration
#[derive(Debug, Clone)]
pub struct DiscordConfig {
    pub webhook_url: String,
    pub events: EventFilter,
    /// Forum ids to notify for; `None` means all forums
    pub forums: Option<HashSet<i64>>,
    pub style: PayloadStyle,
}

impl DiscordConfig {
    /// Parse and validate the host's settings map
    pub fn from_settings(settings: &HashMap<String, String>) -> Result<Self> {
        let webhook_url = match settings.get(WEBHOOK_KEY) {
            Some(url) if !url.is_empty() => url.clone(),
            _ => return Err(Error::MissingWebhook),
        };

        let events = EventFilter::parse(setting(settings, EVENTS_KEY))?;
        let forums = parse_forum_filter(setting(settings, FORUMS_KEY))?;
        let style = PayloadStyle::parse(setting(settings, STYLE_KEY))?;

        Ok(Self {
            webhook_url,
            events,
            forums,
            style,
        })
    }

    /// Pass/fail validation with no other side effect
    pub fn validate(settings: &HashMap<String, String>) -> Result<()> {
        Self::from_settings(settings).map(|_| ())
    }

    /// Check if an event kind passes the event filter
    pub fn allows(&self, kind: EventKind) -> bool {
        self.events.allows(kind)
    }

    /// Check if a forum passes the forum filter
    pub fn allows_forum(&self, forum_id: i64) -> bool {
        match &self.forums {
            Some(forums) => forums.contains(&forum_id),
            None => true,
        }
    }
}

fn setting<'a>(settings: &'a HashMap<String, String>, key: &str) -> &'a str {
    settings.get(key).map(String::as_str).unwrap_or("")
}

/// Parse a comma-separated forum id list. Tokens are not trimmed, so
/// `"3, 5"` is rejected.
fn parse_forum_filter(raw: &str) -> Result<Option<HashSet<i64>>> {
    if raw.is_empty() {
        return Ok(None);
    }

    let mut forums = HashSet::new();
    for token in raw.split(',') {
        let fid: i64 = token
            .parse()
            .map_err(|_| Error::InvalidForumFilter(token.to_string()))?;
        forums.insert(fid);
    }
    Ok(Some(forums))
}
