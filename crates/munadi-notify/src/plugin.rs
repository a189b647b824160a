//! Plugin lifecycle
//!
//! Validation runs at activation and again at initialization; hook
//! registration only happens when validation passes. Deactivation removes
//! the creation callbacks.

use std::collections::HashMap;
use std::sync::Arc;

use munadi_core::config::DiscordConfig;
use munadi_core::types::Site;
use munadi_core::Result;
use munadi_forum::{ForumRepository, HookBus};
use tracing::info;

use crate::dispatcher::NotificationDispatcher;

/// Registry name for this plugin
pub const PLUGIN_NAME: &str = "discord";

/// Plugin descriptor shown by the host
#[derive(Debug, Clone, Copy)]
pub struct PluginInfo {
    pub name: &'static str,
    pub title: &'static str,
    pub author: &'static str,
}

pub struct DiscordPlugin {
    settings: HashMap<String, String>,
    site: Site,
    forum: Arc<dyn ForumRepository>,
}

impl DiscordPlugin {
    pub fn new(
        settings: HashMap<String, String>,
        site: Site,
        forum: Arc<dyn ForumRepository>,
    ) -> Self {
        Self {
            settings,
            site,
            forum,
        }
    }

    pub fn info() -> PluginInfo {
        PluginInfo {
            name: PLUGIN_NAME,
            title: "Discord",
            author: "Munadi Team",
        }
    }

    /// Activation gate: the plugin may only run with a valid configuration.
    pub fn activate(&self) -> Result<()> {
        DiscordConfig::validate(&self.settings)
    }

    /// Register the creation hooks. Skipped entirely when validation fails.
    pub async fn init(&self, bus: &HookBus) -> Result<()> {
        let config = DiscordConfig::from_settings(&self.settings)?;
        let dispatcher =
            NotificationDispatcher::new(config, self.site.clone(), Arc::clone(&self.forum));
        bus.add_hook(PLUGIN_NAME, Arc::new(dispatcher)).await;
        info!("Registered creation hooks for plugin {}", PLUGIN_NAME);
        Ok(())
    }

    /// Remove the creation hooks.
    pub async fn deactivate(&self, bus: &HookBus) {
        bus.remove_hook(PLUGIN_NAME).await;
        info!("Removed creation hooks for plugin {}", PLUGIN_NAME);
    }
}
