use super::Settings;
use crate::config::SETTINGS_FILE_NAME;
use crate::error::{AppError, AppResult};
use std::fs;
use std::path::Path;

/// Load settings from the JSON file. `Ok(None)` when there is no file yet.
pub fn load_local(dir: &Path) -> AppResult<Option<Settings>> {
    let path = dir.join(SETTINGS_FILE_NAME);

    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path).map_err(|e| AppError::settings(e.to_string()))?;
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| AppError::settings(format!("{}: {}", path.display(), e)))
}

/// Save settings to the JSON file
pub fn save_local(dir: &Path, settings: &Settings) -> AppResult<()> {
    let path = dir.join(SETTINGS_FILE_NAME);
    let content =
        serde_json::to_string_pretty(settings).map_err(|e| AppError::settings(e.to_string()))?;
    fs::write(&path, content).map_err(|e| AppError::settings(e.to_string()))?;
    Ok(())
}
