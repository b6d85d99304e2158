mod legacy;
mod local;

use crate::config::{APP_DIR_NAME, DEFAULT_CITY, DEFAULT_METHOD, LEGACY_CITY_FILE_NAME};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User preferences persisted between runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default = "default_method")]
    pub method: u8,
    #[serde(default = "default_notifications")]
    pub notifications: bool,
}

fn default_method() -> u8 {
    DEFAULT_METHOD
}

fn default_notifications() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            city: DEFAULT_CITY.to_string(),
            country: String::new(),
            method: DEFAULT_METHOD,
            notifications: true,
        }
    }
}

/// Reads and writes `Settings` under the platform config directory.
pub struct SettingsStore {
    dir: PathBuf,
    legacy_city_path: Option<PathBuf>,
}

impl SettingsStore {
    /// Store in the platform config dir, migrating `~/.namaz_sehir.txt` if present.
    pub fn new() -> AppResult<Self> {
        let dir = dirs::config_dir()
            .ok_or_else(|| AppError::settings("Failed to get config dir"))?
            .join(APP_DIR_NAME);
        let legacy_city_path = dirs::home_dir().map(|home| home.join(LEGACY_CITY_FILE_NAME));
        Self::at(dir, legacy_city_path)
    }

    pub fn at(dir: PathBuf, legacy_city_path: Option<PathBuf>) -> AppResult<Self> {
        fs::create_dir_all(&dir).map_err(|e| AppError::settings(e.to_string()))?;
        Ok(Self {
            dir,
            legacy_city_path,
        })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load settings. A missing or unreadable file yields defaults; when only
    /// the legacy city file exists its city is imported and saved.
    pub fn load(&self) -> Settings {
        match local::load_local(&self.dir) {
            Ok(Some(settings)) => return settings,
            Ok(None) => {}
            Err(e) => {
                log::warn!("Ignoring unreadable settings, using defaults: {}", e);
                return Settings::default();
            }
        }

        let Some(legacy_path) = self.legacy_city_path.as_deref() else {
            return Settings::default();
        };

        match legacy::try_migrate_legacy_city(legacy_path) {
            Some(settings) => {
                if let Err(e) = self.save(&settings) {
                    log::warn!("Failed to save migrated settings: {}", e);
                }
                settings
            }
            None => Settings::default(),
        }
    }

    pub fn save(&self, settings: &Settings) -> AppResult<()> {
        local::save_local(&self.dir, settings)
    }
}
