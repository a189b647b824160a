//! Configuration for the Munadi CLI
//!
//! Example config:
//! ```toml
//! [site]
//! name = "MyForum"
//! host = "forum.test"
//! ssl = false
//!
//! [plugin]
//! DiscordWebhook = "https://discord.com/api/webhooks/..."
//! DiscordEvents = ""
//! DiscordForums = ""
//! ```

use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use munadi_core::types::Site;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CliConfig {
    pub site: Site,

    /// Raw plugin settings, exactly as the host forum would hand them over
    #[serde(default)]
    pub plugin: HashMap<String, String>,
}

impl CliConfig {
    pub fn from_file(path: &str) -> Result<Self> {
        let content =
            fs::read_to_string(path).with_context(|| format!("Failed to read config: {}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse config: {}", path))
    }
}
