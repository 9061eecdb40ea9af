use serde::{Deserialize, Serialize};

/// Top-level Toolvana configuration container.
///
/// Every section has defaults, so a partial config file only overrides what it names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct ToolvanaSettings {
    pub recent: RecentToolsSettings,
    pub search: SearchSettings,
    pub selectors: SelectorSettings,
    pub storage: StorageSettings,
}

/// Recently used tools list settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct RecentToolsSettings {
    pub storage_key: String,
    pub max_items: usize,
}

impl Default for RecentToolsSettings {
    fn default() -> Self {
        Self {
            storage_key: "toolvana_recent".to_string(),
            max_items: 5,
        }
    }
}

/// Search-as-you-type settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SearchSettings {
    pub debounce_ms: u64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { debounce_ms: 300 }
    }
}

/// Selectors of the page elements the widgets attach to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SelectorSettings {
    pub recent_list: String,
    pub tools_grid: String,
    pub search_input: String,
    pub results_count: String,
}

impl Default for SelectorSettings {
    fn default() -> Self {
        Self {
            recent_list: "#recent-tools-list".to_string(),
            tools_grid: "#araclar .tools-grid".to_string(),
            search_input: "#tools-search".to_string(),
            results_count: ".search-results-count".to_string(),
        }
    }
}

/// Durable storage settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct StorageSettings {
    /// Database file name, resolved inside the data directory.
    pub database_file: String,
    pub theme_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            database_file: "toolvana.db".to_string(),
            theme_key: "toolvana_theme_preference".to_string(),
        }
    }
}
