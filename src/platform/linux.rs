// Toolvana platform paths for Linux
// Config: ~/.config/toolvana
// Data:   ~/.local/share/toolvana

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

/// `$XDG_CONFIG_HOME/toolvana` if set, otherwise `~/.config/toolvana`.
pub fn get_config_dir() -> PathBuf {
    match env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("toolvana"),
        Err(_) => home_dir().join(".config").join("toolvana"),
    }
}

/// `$XDG_DATA_HOME/toolvana` if set, otherwise `~/.local/share/toolvana`.
pub fn get_data_dir() -> PathBuf {
    match env::var("XDG_DATA_HOME") {
        Ok(xdg) => PathBuf::from(xdg).join("toolvana"),
        Err(_) => home_dir().join(".local").join("share").join("toolvana"),
    }
}
