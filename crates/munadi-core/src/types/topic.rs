//! Topic and reply records owned by the host forum

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Topic {
    pub id: i64,
    /// Owning forum
    pub forum_id: i64,
    pub title: String,
    pub content: String,
    /// Site-relative permalink, e.g. `/t/42`
    pub link: String,
    /// Authoring user id
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    pub id: i64,
    /// Parent topic
    pub topic_id: i64,
    pub content: String,
    /// Authoring user id
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
