// Toolvana platform abstraction
// Provides platform-specific config and data directories for Windows, macOS, and Linux.

use std::env;
use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "TOOLVANA_DATA_DIR";

/// Returns the platform-specific configuration directory for Toolvana.
///
/// - **Linux**: `~/.config/toolvana` (or `$XDG_CONFIG_HOME/toolvana`)
/// - **macOS**: `~/Library/Application Support/Toolvana`
/// - **Windows**: `%APPDATA%/Toolvana`
pub fn get_config_dir() -> PathBuf {
    #[cfg(target_os = "linux")]
    {
        linux::get_config_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_config_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_config_dir()
    }
}

/// Returns the data directory holding the key-value database.
///
/// `$TOOLVANA_DATA_DIR` wins when set; otherwise:
/// - **Linux**: `~/.local/share/toolvana` (or `$XDG_DATA_HOME/toolvana`)
/// - **macOS**: `~/Library/Application Support/Toolvana`
/// - **Windows**: `%APPDATA%/Toolvana`
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = env::var(DATA_DIR_ENV) {
        if !dir.trim().is_empty() {
            return PathBuf::from(dir);
        }
    }
    #[cfg(target_os = "linux")]
    {
        linux::get_data_dir()
    }
    #[cfg(target_os = "macos")]
    {
        macos::get_data_dir()
    }
    #[cfg(target_os = "windows")]
    {
        windows::get_data_dir()
    }
}
