//! User configuration management
//!
//! Handles saving and loading user preferences: language and theme.

use crate::theme::ThemeConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Preferred language code (e.g., "en", "de")
    pub language: String,
    /// UI Theme settings
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            theme: ThemeConfig::default(),
        }
    }
}

impl UserConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("LedgerFlow");
            p.push("config.json");
            p
        })
    }

    /// Load configuration from disk, falling back to defaults on any
    /// missing or unreadable file.
    pub fn load() -> Self {
        Self::config_path()
            .and_then(|path| {
                if path.exists() {
                    fs::read_to_string(&path).ok()
                } else {
                    None
                }
            })
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default()
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<(), std::io::Error> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    /// Update language and save
    pub fn set_language(&mut self, lang: &str) {
        self.language = lang.to_string();
        if let Err(e) = self.save() {
            tracing::error!("Failed to save config: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;

    #[test]
    fn roundtrips_through_json() {
        let mut config = UserConfig::default();
        config.language = "de".to_string();
        config.theme.theme = Theme::Light;

        let json = serde_json::to_string(&config).unwrap();
        let back: UserConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.language, "de");
        assert_eq!(back.theme.theme, Theme::Light);
    }

    #[test]
    fn missing_theme_field_defaults() {
        let back: UserConfig = serde_json::from_str(r#"{"language":"en"}"#).unwrap();
        assert_eq!(back.theme.theme, Theme::Dark);
    }
}
