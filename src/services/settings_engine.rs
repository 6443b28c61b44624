// Linkshelf Settings Engine
// Loads, saves and edits `LinkshelfSettings`, stored as a JSON file.
// A missing file or section means defaults; a malformed file is an error.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::platform;
use crate::types::errors::SettingsError;
use crate::types::settings::LinkshelfSettings;

/// Trait defining the settings engine interface.
pub trait SettingsEngineTrait {
    fn load(&mut self) -> Result<LinkshelfSettings, SettingsError>;
    fn save(&self) -> Result<(), SettingsError>;
    fn get_settings(&self) -> &LinkshelfSettings;
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError>;
    fn reset(&mut self) -> Result<(), SettingsError>;
    fn get_config_path(&self) -> &str;
}

/// Settings engine implementation that persists settings as JSON on disk.
pub struct SettingsEngine {
    config_path: String,
    settings: LinkshelfSettings,
}

impl SettingsEngine {
    /// Creates a new SettingsEngine.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise see [`platform::default_settings_path`].
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = path_override.unwrap_or_else(|| {
            platform::default_settings_path()
                .to_string_lossy()
                .to_string()
        });

        Self {
            config_path,
            settings: LinkshelfSettings::default(),
        }
    }

    fn path(&self) -> &Path {
        Path::new(&self.config_path)
    }
}

fn io_error(action: &str, path: &Path, e: io::Error) -> SettingsError {
    SettingsError::IoError(format!("{} {}: {}", action, path.display(), e))
}

fn to_json(settings: &LinkshelfSettings) -> Result<serde_json::Value, SettingsError> {
    serde_json::to_value(settings)
        .map_err(|e| SettingsError::SerializationError(format!("Failed to serialize settings: {}", e)))
}

impl SettingsEngineTrait for SettingsEngine {
    /// Reads the settings file. Sections or fields it leaves out take their
    /// defaults; a missing file means all defaults.
    fn load(&mut self) -> Result<LinkshelfSettings, SettingsError> {
        let path = Path::new(&self.config_path);
        self.settings = match fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                SettingsError::SerializationError(format!(
                    "Failed to parse {}: {}",
                    path.display(),
                    e
                ))
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                LinkshelfSettings::default()
            }
            Err(e) => return Err(io_error("Failed to read", path, e)),
        };
        Ok(self.settings.clone())
    }

    /// Writes the current settings, creating parent directories as needed.
    fn save(&self) -> Result<(), SettingsError> {
        let path = self.path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error("Failed to create", parent, e))?;
        }

        let json = serde_json::to_string_pretty(&to_json(&self.settings)?).map_err(|e| {
            SettingsError::SerializationError(format!("Failed to serialize settings: {}", e))
        })?;
        fs::write(path, json).map_err(|e| io_error("Failed to write", path, e))?;
        debug!(path = %path.display(), "settings saved");
        Ok(())
    }

    fn get_settings(&self) -> &LinkshelfSettings {
        &self.settings
    }

    /// Updates one setting by dot-notation key path and saves.
    ///
    /// The new value is checked by deserializing the whole settings tree,
    /// e.g. `"general.id_scheme"` only accepts `"uuid"` or `"sequential"`.
    fn set_value(&mut self, key: &str, value: serde_json::Value) -> Result<(), SettingsError> {
        if key.is_empty() {
            return Err(SettingsError::InvalidKey("Key cannot be empty".to_string()));
        }

        let mut json_value = to_json(&self.settings)?;

        let (parents, leaf) = match key.rsplit_once('.') {
            Some((parents, leaf)) => (Some(parents), leaf),
            None => (None, key),
        };

        let mut current = &mut json_value;
        for part in parents.into_iter().flat_map(|p| p.split('.')) {
            current = current.get_mut(part).ok_or_else(|| {
                SettingsError::InvalidKey(format!("Key '{}' not found in settings", key))
            })?;
        }

        match current {
            serde_json::Value::Object(map) if map.contains_key(leaf) => {
                map.insert(leaf.to_string(), value);
            }
            serde_json::Value::Object(_) => {
                return Err(SettingsError::InvalidKey(format!(
                    "Key '{}' not found in settings",
                    key
                )));
            }
            _ => {
                return Err(SettingsError::InvalidKey(format!(
                    "Cannot navigate to key '{}': intermediate value is not an object",
                    key
                )));
            }
        }

        let new_settings: LinkshelfSettings = serde_json::from_value(json_value).map_err(|e| {
            SettingsError::InvalidValue(format!("Invalid value for key '{}': {}", key, e))
        })?;

        self.settings = new_settings;
        self.save()
    }

    /// Resets all settings to defaults and saves to disk.
    fn reset(&mut self) -> Result<(), SettingsError> {
        self.settings = LinkshelfSettings::default();
        self.save()
    }

    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
