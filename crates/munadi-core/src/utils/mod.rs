//! Utility functions

use uuid::Uuid;

use crate::{SUMMARY_ELLIPSIS, SUMMARY_MAX_CHARS};

/// Generate a unique request ID
pub fn generate_request_id() -> String {
    Uuid::new_v4().to_string().replace("-", "").to_uppercase()
}

/// Truncate content for display. Content longer than `SUMMARY_MAX_CHARS`
/// characters keeps its head and gains an ellipsis marker, worst case
/// exactly `SUMMARY_MAX_CHARS` characters long.
pub fn summarize(content: &str) -> String {
    if content.chars().count() <= SUMMARY_MAX_CHARS {
        return content.to_string();
    }

    let head: String = content
        .chars()
        .take(SUMMARY_MAX_CHARS - SUMMARY_ELLIPSIS.len())
        .collect();
    format!("{}{}", head, SUMMARY_ELLIPSIS)
}
