use toolvana::types::errors::*;

// === StorageError Tests ===

#[test]
fn storage_error_quota_display() {
    let err = StorageError::QuotaExceeded {
        key: "toolvana_recent".to_string(),
        needed: 120,
        available: 16,
    };
    assert_eq!(
        err.to_string(),
        "Storage quota exceeded: toolvana_recent needs 120 bytes, 16 available"
    );
}

#[test]
fn storage_error_disabled_display() {
    assert_eq!(StorageError::Disabled.to_string(), "Storage is disabled");
}

#[test]
fn storage_error_from_rusqlite() {
    let err: StorageError = rusqlite::Error::InvalidQuery.into();
    assert!(matches!(err, StorageError::DatabaseError(_)));
    assert!(err.to_string().starts_with("Storage database error:"));
}

// === RecentToolsError Tests ===

#[test]
fn recent_tools_error_display_variants() {
    assert_eq!(
        RecentToolsError::InvalidToolId("  ".to_string()).to_string(),
        "Invalid tool id: \"  \""
    );
    assert_eq!(
        RecentToolsError::NotPersisted("toolvana_recent".to_string()).to_string(),
        "Recent tools could not be persisted under key: toolvana_recent"
    );
}

#[test]
fn recent_tools_error_from_serde() {
    let serde_err = serde_json::from_str::<Vec<String>>("{").unwrap_err();
    let err: RecentToolsError = serde_err.into();
    assert!(err
        .to_string()
        .starts_with("Recent tools serialization error:"));
}

// === PageError Tests ===

#[test]
fn page_error_display_variants() {
    assert_eq!(
        PageError::ElementNotFound("#recent-tools-list".to_string()).to_string(),
        "Element not found for selector: #recent-tools-list"
    );
    assert_eq!(
        PageError::InvalidSelector("div > p".to_string()).to_string(),
        "Invalid selector: \"div > p\""
    );
}

// === ConfigError Tests ===

#[test]
fn config_error_display_variants() {
    assert_eq!(
        ConfigError::IoError("disk full".to_string()).to_string(),
        "Config I/O error: disk full"
    );
    assert_eq!(
        ConfigError::InvalidValue("recent.max_items must be at least 1".to_string()).to_string(),
        "Invalid config value: recent.max_items must be at least 1"
    );
}

// === ThemeError Tests ===

#[test]
fn theme_error_display() {
    assert_eq!(
        ThemeError::UnknownPreference("sepia".to_string()).to_string(),
        "Unknown theme preference: sepia"
    );
}

#[test]
fn errors_implement_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(StorageError::Disabled);
    assert_eq!(err.to_string(), "Storage is disabled");
}
