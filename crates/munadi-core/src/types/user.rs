//! User records owned by the host forum

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Display name
    pub name: String,
    /// Site-relative profile link, e.g. `/u/1`
    pub link: String,
    /// Avatar reference; site-relative or already absolute
    pub avatar: String,
}
