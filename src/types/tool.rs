use serde::{Deserialize, Serialize};

/// A single entry in the recently used tools list.
///
/// Serialized as `{id, name, url, timestamp}`; `timestamp` is Unix epoch milliseconds
/// of the last save and is metadata only (ordering is by list position).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecentToolEntry {
    pub id: String,
    pub name: String,
    pub url: String,
    pub timestamp: i64,
}

/// Static description of a tool listed on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Title and description of a tool card as read from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCard {
    pub title: String,
    pub description: String,
}

impl ToolCard {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}
