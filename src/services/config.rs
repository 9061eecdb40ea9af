// Toolvana Config Engine
// Loads, validates, updates and saves the crate configuration.
// Stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::platform;
use crate::types::errors::ConfigError;
use crate::types::settings::ToolvanaSettings;

/// Trait defining the config engine interface.
pub trait ConfigEngineTrait {
    fn load(&mut self) -> Result<ToolvanaSettings, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn get_settings(&self) -> &ToolvanaSettings;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfigError>;
    fn reset(&mut self) -> Result<(), ConfigError>;
    fn get_config_path(&self) -> &str;
}

/// Config engine persisting `ToolvanaSettings` as JSON on disk.
pub struct ConfigEngine {
    config_path: String,
    settings: ToolvanaSettings,
}

impl ConfigEngine {
    /// Creates a new ConfigEngine.
    ///
    /// Without `path_override`, the config lives at `<config dir>/config.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => platform::get_config_dir()
                .join("config.json")
                .to_string_lossy()
                .to_string(),
        };

        Self {
            config_path,
            settings: ToolvanaSettings::default(),
        }
    }

    /// Rejects values the components cannot work with.
    pub fn validate(settings: &ToolvanaSettings) -> Result<(), ConfigError> {
        if settings.recent.max_items == 0 {
            return Err(ConfigError::InvalidValue(
                "recent.max_items must be at least 1".to_string(),
            ));
        }
        let required = [
            ("recent.storage_key", &settings.recent.storage_key),
            ("storage.theme_key", &settings.storage.theme_key),
            ("storage.database_file", &settings.storage.database_file),
            ("selectors.recent_list", &settings.selectors.recent_list),
            ("selectors.tools_grid", &settings.selectors.tools_grid),
            ("selectors.search_input", &settings.selectors.search_input),
            ("selectors.results_count", &settings.selectors.results_count),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::InvalidValue(format!("{} cannot be empty", name)));
            }
        }
        Ok(())
    }
}

impl ConfigEngineTrait for ConfigEngine {
    /// Loads the config file. A missing file yields defaults; a malformed or
    /// invalid one is an error.
    fn load(&mut self) -> Result<ToolvanaSettings, ConfigError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.settings = ToolvanaSettings::default();
            return Ok(self.settings.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(format!("Failed to read config file: {}", e)))?;

        let settings: ToolvanaSettings = serde_json::from_str(&content).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;
        Self::validate(&settings)?;

        self.settings = settings;
        Ok(self.settings.clone())
    }

    /// Writes the current config, creating parent directories as needed.
    fn save(&self) -> Result<(), ConfigError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.settings).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| ConfigError::IoError(format!("Failed to write config file: {}", e)))
    }

    fn get_settings(&self) -> &ToolvanaSettings {
        &self.settings
    }

    /// Updates one value by dot-notation path (`"recent.max_items"`,
    /// `"selectors.tools_grid"`), validates, and saves.
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), ConfigError> {
        let parts: Vec<&str> = key.split('.').filter(|p| !p.is_empty()).collect();
        let Some((last, parents)) = parts.split_last() else {
            return Err(ConfigError::InvalidValue("Key cannot be empty".to_string()));
        };

        let mut json_value = serde_json::to_value(&self.settings).map_err(|e| {
            ConfigError::SerializationError(format!("Failed to serialize config: {}", e))
        })?;

        let mut current = &mut json_value;
        for part in parents {
            current = current
                .get_mut(*part)
                .ok_or_else(|| ConfigError::InvalidValue(format!("Unknown config key '{}'", key)))?;
        }
        match current {
            Value::Object(map) if map.contains_key(*last) => {
                map.insert(last.to_string(), value);
            }
            _ => {
                return Err(ConfigError::InvalidValue(format!(
                    "Unknown config key '{}'",
                    key
                )))
            }
        }

        let new_settings: ToolvanaSettings = serde_json::from_value(json_value).map_err(|e| {
            ConfigError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;
        Self::validate(&new_settings)?;

        self.settings = new_settings;
        self.save()
    }

    /// Restores defaults and saves.
    fn reset(&mut self) -> Result<(), ConfigError> {
        self.settings = ToolvanaSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
