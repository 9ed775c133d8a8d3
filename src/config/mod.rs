use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::session::ZenMode;
use crate::error::{Result, ZenfieldError};

/// Application settings. Crypto parameters and field motion constants
/// are fixed by contract and deliberately not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub tick_rate_ms: u64,
    pub clipboard_clear_secs: u64,
    pub startup_mode: ZenMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 33,
            clipboard_clear_secs: 30,
            startup_mode: ZenMode::Calm,
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let path = config_file_path();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = AppConfig::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content)?;
        Ok(())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)?;
            let config: AppConfig = toml::from_str(&content)?;
            Ok(config)
        } else {
            Err(ZenfieldError::Config(format!(
                "Config file not found: {}",
                path.display()
            )))
        }
    }
}

fn config_file_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("", "", "zenfield") {
        dirs.config_dir().join("config.toml")
    } else {
        PathBuf::from("zenfield.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let config = AppConfig {
            tick_rate_ms: 16,
            clipboard_clear_secs: 15,
            startup_mode: ZenMode::Gratitude,
        };

        let content = toml::to_string_pretty(&config).unwrap();
        fs::write(&path, &content).unwrap();
        let loaded = AppConfig::load_from(&path).unwrap();

        assert_eq!(loaded.tick_rate_ms, 16);
        assert_eq!(loaded.clipboard_clear_secs, 15);
        assert_eq!(loaded.startup_mode, ZenMode::Gratitude);
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.tick_rate_ms, 33);
        assert_eq!(config.clipboard_clear_secs, 30);
        assert_eq!(config.startup_mode, ZenMode::Calm);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let result = AppConfig::load_from(&dir.path().join("nope.toml"));
        assert!(result.is_err());
    }
}
