//! check command - validate the plugin configuration

use anyhow::Result;
use munadi_core::config::DiscordConfig;

use crate::config::CliConfig;

pub fn execute(config: &CliConfig) -> Result<()> {
    let parsed = DiscordConfig::from_settings(&config.plugin)?;

    println!("Configuration OK");
    println!("  site: {} ({})", config.site.name, config.site.base_url());
    println!("  webhook: {}", parsed.webhook_url);
    println!("  events: {:?}", parsed.events);
    match &parsed.forums {
        Some(forums) => {
            let mut ids: Vec<i64> = forums.iter().copied().collect();
            ids.sort_unstable();
            let ids: Vec<String> = ids.iter().map(|id| id.to_string()).collect();
            println!("  forums: {}", ids.join(", "));
        }
        None => println!("  forums: all"),
    }
    println!("  style: {:?}", parsed.style);

    Ok(())
}
