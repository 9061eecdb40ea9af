//! Recent Tools Store for Toolvana.
//!
//! Implements `RecentToolsStoreTrait`: saving, listing, and clearing the
//! recently used tools list. The list is most-recent-first, deduplicated by
//! case-insensitive id, capped at a fixed size, and persisted as one JSON array
//! under one storage key. This component knows nothing about the page; see
//! `ui::recent_tools_widget` for rendering.

use serde_json::Value;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

use crate::services::tool_catalog;
use crate::storage::{KeyValueStore, SafeStorage};
use crate::types::errors::RecentToolsError;
use crate::types::settings::RecentToolsSettings;
use crate::types::tool::RecentToolEntry;

/// Trait defining recent tools operations.
pub trait RecentToolsStoreTrait {
    fn save(&mut self, tool_id: &str) -> bool;
    fn save_with_url(&mut self, tool_id: &str, url: &str) -> bool;
    fn get(&self) -> Vec<RecentToolEntry>;
    fn clear(&mut self) -> bool;
}

/// Recent tools store borrowing the shared durable storage.
pub struct RecentToolsStore<'a, S: KeyValueStore> {
    storage: &'a mut SafeStorage<S>,
    settings: &'a RecentToolsSettings,
    clock: fn() -> i64,
}

/// Current UNIX time in milliseconds.
pub fn now_millis() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}

impl<'a, S: KeyValueStore> RecentToolsStore<'a, S> {
    pub fn new(storage: &'a mut SafeStorage<S>, settings: &'a RecentToolsSettings) -> Self {
        Self {
            storage,
            settings,
            clock: now_millis,
        }
    }

    /// Replaces the timestamp source.
    pub fn with_clock(mut self, clock: fn() -> i64) -> Self {
        self.clock = clock;
        self
    }

    /// Validates, reorders, truncates and persists. Returns the new head entry.
    pub fn try_save(
        &mut self,
        tool_id: &str,
        url: Option<&str>,
    ) -> Result<RecentToolEntry, RecentToolsError> {
        let id = tool_id.trim();
        if id.is_empty() {
            return Err(RecentToolsError::InvalidToolId(tool_id.to_string()));
        }

        let entry = RecentToolEntry {
            id: id.to_string(),
            name: tool_catalog::display_name(id),
            url: match url.map(str::trim) {
                Some(u) if !u.is_empty() => u.to_string(),
                _ => tool_catalog::tool_url(id),
            },
            timestamp: (self.clock)(),
        };

        let key = id.to_lowercase();
        let mut entries = self.get();
        entries.retain(|e| e.id.to_lowercase() != key);
        entries.insert(0, entry.clone());
        entries.truncate(self.settings.max_items);

        let json = serde_json::to_string(&entries)?;
        if !self.storage.write(&self.settings.storage_key, &json) {
            return Err(RecentToolsError::NotPersisted(
                self.settings.storage_key.clone(),
            ));
        }
        debug!(tool_id = %entry.id, count = entries.len(), "saved recent tool");
        Ok(entry)
    }
}

/// Parses a stored payload, keeping only well-formed entries.
///
/// Bare id strings (the older schema) are upgraded to full entries.
pub fn parse_entries(payload: &str, max_items: usize) -> Vec<RecentToolEntry> {
    let parsed: Value = match serde_json::from_str(payload) {
        Ok(v) => v,
        Err(e) => {
            warn!(error = %e, "stored recent tools are not valid JSON");
            return Vec::new();
        }
    };
    let Value::Array(items) = parsed else {
        warn!("stored recent tools are not an array");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(parse_entry)
        .take(max_items)
        .collect()
}

fn parse_entry(item: Value) -> Option<RecentToolEntry> {
    match item {
        Value::String(id) if !id.trim().is_empty() => Some(RecentToolEntry {
            name: tool_catalog::display_name(&id),
            url: tool_catalog::tool_url(&id),
            id,
            timestamp: 0,
        }),
        Value::Object(_) => match serde_json::from_value::<RecentToolEntry>(item) {
            Ok(entry) if !entry.id.trim().is_empty() => Some(entry),
            Ok(_) => None,
            Err(e) => {
                debug!(error = %e, "dropping malformed recent tool entry");
                None
            }
        },
        _ => None,
    }
}

impl<'a, S: KeyValueStore> RecentToolsStoreTrait for RecentToolsStore<'a, S> {
    /// Saves a tool id at the front of the list. Invalid ids and storage failures
    /// are logged and leave the persisted list unchanged.
    fn save(&mut self, tool_id: &str) -> bool {
        match self.try_save(tool_id, None) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "recent tool not saved");
                false
            }
        }
    }

    /// Like `save`, with an explicitly supplied link target.
    fn save_with_url(&mut self, tool_id: &str, url: &str) -> bool {
        match self.try_save(tool_id, Some(url)) {
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "recent tool not saved");
                false
            }
        }
    }

    /// Returns the persisted list, most recent first. Never fails: absent,
    /// unreadable or malformed storage yields an empty list.
    fn get(&self) -> Vec<RecentToolEntry> {
        match self.storage.read(&self.settings.storage_key) {
            Some(payload) => parse_entries(&payload, self.settings.max_items),
            None => Vec::new(),
        }
    }

    /// Removes the persisted list entirely.
    fn clear(&mut self) -> bool {
        let removed = self.storage.delete(&self.settings.storage_key);
        if removed {
            debug!("cleared recent tools");
        }
        removed
    }
}
