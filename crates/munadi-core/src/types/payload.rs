//! Discord webhook wire format
//!
//! Two payload shapes are produced: a plain content string, or a single
//! rich embed with an author block.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub embeds: Vec<Embed>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub url: String,
    pub author: EmbedAuthor,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmbedAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

impl WebhookPayload {
    /// Plain content shape
    pub fn plain(username: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            content: Some(content.into()),
            embeds: Vec::new(),
        }
    }

    /// Rich embed shape
    pub fn embed(username: impl Into<String>, embed: Embed) -> Self {
        Self {
            username: username.into(),
            content: None,
            embeds: vec![embed],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_payload_shape() {
        let payload = WebhookPayload::plain("MyForum", "Hello: World");
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["username"], "MyForum");
        assert_eq!(json["content"], "Hello: World");
        assert!(json.get("embeds").is_none());
    }

    #[test]
    fn test_embed_payload_shape() {
        let payload = WebhookPayload::embed(
            "MyForum",
            Embed {
                title: "Hello".to_string(),
                description: "World".to_string(),
                url: "http://forum.test/t/42".to_string(),
                author: EmbedAuthor {
                    name: "alice".to_string(),
                    url: "http://forum.test/u/1".to_string(),
                    icon_url: "http://forum.test/a/1.png".to_string(),
                },
            },
        );
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["username"], "MyForum");
        assert!(json.get("content").is_none());
        assert_eq!(json["embeds"][0]["title"], "Hello");
        assert_eq!(json["embeds"][0]["description"], "World");
        assert_eq!(json["embeds"][0]["url"], "http://forum.test/t/42");
        assert_eq!(json["embeds"][0]["author"]["name"], "alice");
        assert_eq!(json["embeds"][0]["author"]["url"], "http://forum.test/u/1");
        assert_eq!(
            json["embeds"][0]["author"]["icon_url"],
            "http://forum.test/a/1.png"
        );
    }
}
