//! Site-wide settings provided by the host forum

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Site {
    /// Display name, used as the webhook username
    pub name: String,
    /// Host part of the public base URL, e.g. `forum.test`
    pub host: String,
    /// Whether the site is served over TLS
    #[serde(default)]
    pub ssl: bool,
}

impl Site {
    pub fn base_url(&self) -> String {
        let scheme = if self.ssl { "https" } else { "http" };
        format!("{}://{}", scheme, self.host)
    }

    /// Make a link absolute. Root-relative paths are prefixed with the
    /// site base URL; protocol-relative and absolute URLs pass through
    /// unchanged.
    pub fn absolute_url(&self, path: &str) -> String {
        if path.starts_with('/') && !path.starts_with("//") {
            format!("{}{}", self.base_url(), path)
        } else {
            path.to_string()
        }
    }
}
