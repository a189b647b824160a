//! Munadi Core Library
//!
//! Core types, configuration, and utilities for the Munadi forum
//! notification plugin.

pub mod config;
pub mod error;
pub mod types;
pub mod utils;

pub use config::DiscordConfig;
pub use error::{Error, Result};

/// Munadi version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum characters of topic or reply content shown in a notification
pub const SUMMARY_MAX_CHARS: usize = 100;

/// Marker appended to truncated content
pub const SUMMARY_ELLIPSIS: &str = "...";

/// Maximum characters of a webhook response body kept for diagnostics
pub const RESPONSE_BODY_LIMIT: usize = 2048;
