use thiserror::Error;

// === StorageError ===

/// Errors raised by the durable key-value facility.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Writing the value would exceed the storage quota.
    #[error("Storage quota exceeded: {key} needs {needed} bytes, {available} available")]
    QuotaExceeded {
        key: String,
        needed: usize,
        available: usize,
    },
    /// Storage is disabled (private mode, policy, or a broken backend).
    #[error("Storage is disabled")]
    Disabled,
    /// Database operation failed.
    #[error("Storage database error: {0}")]
    DatabaseError(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(e: rusqlite::Error) -> Self {
        StorageError::DatabaseError(e.to_string())
    }
}

// === RecentToolsError ===

/// Errors related to the recently used tools list.
#[derive(Debug, Error)]
pub enum RecentToolsError {
    /// The tool identifier is empty or whitespace-only.
    #[error("Invalid tool id: {0:?}")]
    InvalidToolId(String),
    /// The list could not be serialized or deserialized.
    #[error("Recent tools serialization error: {0}")]
    SerializationError(String),
    /// The list was built but storage refused to persist it.
    #[error("Recent tools could not be persisted under key: {0}")]
    NotPersisted(String),
}

impl From<serde_json::Error> for RecentToolsError {
    fn from(e: serde_json::Error) -> Self {
        RecentToolsError::SerializationError(e.to_string())
    }
}

// === PageError ===

/// Errors related to locating elements in the page.
#[derive(Debug, Error)]
pub enum PageError {
    /// No element matches the selector.
    #[error("Element not found for selector: {0}")]
    ElementNotFound(String),
    /// The selector could not be parsed.
    #[error("Invalid selector: {0:?}")]
    InvalidSelector(String),
}

// === ConfigError ===

/// Errors related to loading or saving configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading or writing the config file.
    #[error("Config I/O error: {0}")]
    IoError(String),
    /// Failed to serialize or deserialize the config file.
    #[error("Config serialization error: {0}")]
    SerializationError(String),
    /// A config value is out of range.
    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

// === ThemeError ===

/// Errors related to the persisted theme preference.
#[derive(Debug, Error)]
pub enum ThemeError {
    /// The stored value is neither "light" nor "dark".
    #[error("Unknown theme preference: {0}")]
    UnknownPreference(String),
}
