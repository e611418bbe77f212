use crate::{KanbanError, KanbanResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_FALLBACK_LABEL_COLOR: &str = "desert-sand";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Palette color used when an imported label color has no counterpart
    #[serde(default)]
    pub fallback_label_color: Option<String>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/kanban/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("kanban/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("kanban\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Load the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e)
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> KanbanResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| KanbanError::Config(e.to_string()))
    }

    pub fn effective_fallback_label_color(&self) -> &str {
        self.fallback_label_color
            .as_deref()
            .unwrap_or(DEFAULT_FALLBACK_LABEL_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_fallback_color() {
        let config = AppConfig::default();
        assert_eq!(config.effective_fallback_label_color(), "desert-sand");
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "fallback_label_color = \"navy-blue\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.effective_fallback_label_color(), "navy-blue");
    }

    #[test]
    fn test_load_from_empty_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert!(config.fallback_label_color.is_none());
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "fallback_label_color = [").unwrap();

        let result = AppConfig::load_from(&path);
        assert!(matches!(result, Err(KanbanError::Config(_))));
    }
}
