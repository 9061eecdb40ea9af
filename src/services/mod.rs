// Toolvana services
// Services provide configuration, the tool catalog, search, debouncing and theme persistence.

pub mod config;
pub mod debouncer;
pub mod theme_preference;
pub mod tool_catalog;
pub mod tool_search;
