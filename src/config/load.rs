use crate::config::types::{Config, UserSettings};
use anyhow::{Context, Result};
use log::warn;
use std::fs;
use std::path::Path;

/// 設定檔位於目前工作目錄
pub const SETTINGS_FILE: &str = "settings.json";

impl Config {
    pub fn new() -> Result<Self> {
        let settings = Self::load_settings(Path::new(SETTINGS_FILE)).unwrap_or_else(|e| {
            warn!("設定檔讀取失敗，使用預設值: {e:#}");
            UserSettings::default()
        });

        Ok(Self { settings })
    }

    pub fn load_settings(path: &Path) -> Result<UserSettings> {
        if !path.exists() {
            return Ok(UserSettings::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;

        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse settings from {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::Language;
    use tempfile::TempDir;

    #[test]
    fn test_missing_settings_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let settings = Config::load_settings(&temp_dir.path().join(SETTINGS_FILE)).unwrap();
        assert_eq!(settings, UserSettings::default());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, r#"{ "language": "zh-TW", "default_columns": 8 }"#).unwrap();

        let settings = Config::load_settings(&path).unwrap();

        assert_eq!(settings.language, Language::ZhTw);
        assert_eq!(settings.default_columns, 8);
        assert_eq!(settings.frame_extension, "tga");
        assert_eq!(settings.grid_limit, 64);
    }

    #[test]
    fn test_malformed_settings_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(SETTINGS_FILE);
        fs::write(&path, "{ not json").unwrap();

        assert!(Config::load_settings(&path).is_err());
    }
}
