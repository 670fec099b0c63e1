//! Application settings

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// UI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiSettings {
    /// Font size in points
    pub font_size: f32,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { font_size: 14.0 }
    }
}

/// Conversation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Simulated processing delay before the assistant reply, in ms
    pub processing_delay_ms: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            processing_delay_ms: 2000,
        }
    }
}

/// Static asset settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetSettings {
    /// Directory that asset URLs like `/videos/...` resolve against
    pub root: PathBuf,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets"),
        }
    }
}

/// All application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// UI language ("en" or "ru")
    #[serde(default)]
    pub language: Language,
    /// UI settings
    pub ui: UiSettings,
    /// Conversation settings
    #[serde(default)]
    pub chat: ChatSettings,
    /// Asset settings
    #[serde(default)]
    pub assets: AssetSettings,
}

/// UI language, persisted with the settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl AppSettings {
    /// Load settings from file, or return default if not found
    pub fn load() -> Self {
        if let Some(dirs) = directories::ProjectDirs::from("com", "physica", "physica") {
            let config_path = dirs.config_dir().join("settings.json");
            if let Ok(json) = std::fs::read_to_string(&config_path) {
                if let Ok(settings) = serde_json::from_str(&json) {
                    return settings;
                }
            }
        }
        Self::default()
    }

    /// Save settings to file
    pub fn save(&self) {
        if let Some(dirs) = directories::ProjectDirs::from("com", "physica", "physica") {
            let config_dir = dirs.config_dir();
            if std::fs::create_dir_all(config_dir).is_ok() {
                let config_path = config_dir.join("settings.json");
                if let Ok(json) = serde_json::to_string_pretty(self) {
                    let _ = std::fs::write(config_path, json);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let s = AppSettings::default();
        assert_eq!(s.language, Language::En);
        assert_eq!(s.ui.font_size, 14.0);
        assert_eq!(s.chat.processing_delay_ms, 2000);
        assert_eq!(s.assets.root, PathBuf::from("assets"));
    }

    #[test]
    fn test_settings_roundtrip() {
        let mut s = AppSettings::default();
        s.language = Language::Ru;
        s.chat.processing_delay_ms = 0;

        let json = serde_json::to_string(&s).unwrap();
        let back: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, Language::Ru);
        assert_eq!(back.chat.processing_delay_ms, 0);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        // settings written by an older build carry only the ui section
        let json = r#"{ "ui": { "font_size": 16.0 } }"#;
        let s: AppSettings = serde_json::from_str(json).unwrap();
        assert_eq!(s.ui.font_size, 16.0);
        assert_eq!(s.chat.processing_delay_ms, 2000);
        assert_eq!(s.language, Language::En);
    }
}
