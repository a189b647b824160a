//! Discord notification plugin for the Munadi forum
//!
//! On topic or reply creation the plugin builds a short summary and pushes
//! it to a configured Discord incoming webhook with a single best-effort
//! HTTP POST. Per-event failures are logged and never surfaced to the
//! creation flow that triggered them.

pub mod dispatcher;
pub mod plugin;
pub mod webhook;

pub use dispatcher::NotificationDispatcher;
pub use plugin::{DiscordPlugin, PluginInfo, PLUGIN_NAME};
pub use webhook::{WebhookClient, WebhookResponse};

#[cfg(test)]
pub(crate) mod testutil;
