//! Shared test fixtures: a local webhook endpoint and a seeded forum.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::Utc;
use munadi_core::config::{EVENTS_KEY, FORUMS_KEY, STYLE_KEY, WEBHOOK_KEY};
use munadi_core::types::{Reply, Site, Topic, User};
use munadi_forum::InMemoryForum;

pub type Received = Arc<Mutex<Vec<serde_json::Value>>>;

async fn record(
    State((received, status)): State<(Received, StatusCode)>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    received.lock().unwrap().push(body);
    status
}

/// Bind a local webhook endpoint that records every JSON body it receives
/// and answers with the given status.
pub async fn spawn_webhook(status: StatusCode) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/hook", post(record))
        .with_state((received.clone(), status));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/hook", addr), received)
}

pub fn test_site() -> Site {
    Site {
        name: "MyForum".to_string(),
        host: "forum.test".to_string(),
        ssl: false,
    }
}

pub fn test_settings(webhook_url: &str, events: &str, forums: &str) -> HashMap<String, String> {
    let mut settings = HashMap::new();
    settings.insert(WEBHOOK_KEY.to_string(), webhook_url.to_string());
    settings.insert(EVENTS_KEY.to_string(), events.to_string());
    settings.insert(FORUMS_KEY.to_string(), forums.to_string());
    settings.insert(STYLE_KEY.to_string(), String::new());
    settings
}

pub fn topic(id: i64, forum_id: i64, title: &str, content: &str, created_by: i64) -> Topic {
    Topic {
        id,
        forum_id,
        title: title.to_string(),
        content: content.to_string(),
        link: format!("/t/{}", id),
        created_by,
        created_at: Utc::now(),
    }
}

pub fn reply(id: i64, topic_id: i64, content: &str, created_by: i64) -> Reply {
    Reply {
        id,
        topic_id,
        content: content.to_string(),
        created_by,
        created_at: Utc::now(),
    }
}

pub fn user(id: i64, name: &str) -> User {
    User {
        id,
        name: name.to_string(),
        link: format!("/u/{}", id),
        avatar: format!("/a/{}.png", id),
    }
}

/// A forum holding topic 42 ("Hello"/"World" in forum 1), reply 7 to it,
/// both authored by user 1 ("alice").
pub async fn seeded_forum() -> Arc<InMemoryForum> {
    let forum = InMemoryForum::new();
    forum.insert_topic(topic(42, 1, "Hello", "World", 1)).await;
    forum.insert_reply(reply(7, 42, "First!", 1)).await;
    forum.insert_user(user(1, "alice")).await;
    Arc::new(forum)
}
