//! Webhook delivery client
//!
//! One bounded-timeout POST per notification. Failures are terminal; the
//! caller decides what to log.

use std::time::Duration;

use munadi_core::{Error, Result, RESPONSE_BODY_LIMIT};
use reqwest::Client;

/// Connection timeout for the webhook endpoint
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Overall request timeout, including the response body
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response details kept for diagnostics
#[derive(Debug, Clone)]
pub struct WebhookResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Clone)]
pub struct WebhookClient {
    http: Client,
}

impl Default for WebhookClient {
    fn default() -> Self {
        Self::new()
    }
}

impl WebhookClient {
    pub fn new() -> Self {
        let http = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { http }
    }

    /// POST a JSON body to the webhook. Returns the response details on a
    /// success status, `Error::WebhookStatus` otherwise.
    pub async fn push(&self, url: &str, body: String) -> Result<WebhookResponse> {
        let response = self
            .http
            .post(url)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| Error::Delivery(e.to_string()))?;

        let status = response.status();
        let body = match response.text().await {
            Ok(text) => cap_body(&text),
            Err(e) => format!("<unreadable body: {}>", e),
        };

        if status.is_success() {
            Ok(WebhookResponse {
                status: status.as_u16(),
                body,
            })
        } else {
            Err(Error::WebhookStatus {
                status: status.as_u16(),
                body,
            })
        }
    }
}

fn cap_body(text: &str) -> String {
    if text.chars().count() <= RESPONSE_BODY_LIMIT {
        return text.to_string();
    }
    text.chars().take(RESPONSE_BODY_LIMIT).collect()
}
