//! Creation events fired by the host forum

/// A domain event delivered by the host's hook bus. Consumed once, never
/// stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForumEvent {
    TopicCreated { topic_id: i64 },
    ReplyCreated { reply_id: i64 },
}

impl ForumEvent {
    pub fn kind(&self) -> EventKind {
        match self {
            ForumEvent::TopicCreated { .. } => EventKind::Topic,
            ForumEvent::ReplyCreated { .. } => EventKind::Reply,
        }
    }

    /// Identifier of the newly created entity
    pub fn entity_id(&self) -> i64 {
        match self {
            ForumEvent::TopicCreated { topic_id } => *topic_id,
            ForumEvent::ReplyCreated { reply_id } => *reply_id,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Topic,
    Reply,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Topic => "topic",
            EventKind::Reply => "reply",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
