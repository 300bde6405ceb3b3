use crate::error::{FixError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variables checked for the API key, in order.
pub const API_KEY_VARS: [&str; 2] = ["API_KEY", "GEMINI_API_KEY"];

/// Configuration for instafix, stored in the data directory as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FixConfig {
    /// Model used for generation (e.g., "gemini-2.5-flash")
    #[serde(default = "default_model")]
    pub model: String,

    /// Base URL of the generative language API, without a trailing slash
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for FixConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            api_base: default_api_base(),
        }
    }
}

impl FixConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(FixError::Io)?;
        let config: FixConfig = serde_json::from_str(&content).map_err(FixError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(FixError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(FixError::Serialization)?;
        fs::write(config_path, content).map_err(FixError::Io)?;
        Ok(())
    }

    /// Set the API base (drops a trailing slash)
    pub fn set_api_base(&mut self, base: &str) {
        self.api_base = base.trim_end_matches('/').to_string();
    }
}

/// The API key from the environment, if any non-empty one is set.
pub fn api_key_from_env() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|key| key.trim().to_string())
        .find(|key| !key.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = FixConfig::default();
        assert_eq!(config.model, "gemini-2.5-flash");
        assert!(config.api_base.starts_with("https://"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = FixConfig::load(temp.path()).unwrap();
        assert_eq!(config, FixConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("data");

        let mut config = FixConfig::default();
        config.model = "gemini-2.5-pro".to_string();
        config.set_api_base("http://localhost:9000/v1beta/");
        config.save(&dir).unwrap();

        let loaded = FixConfig::load(&dir).unwrap();
        assert_eq!(loaded.model, "gemini-2.5-pro");
        assert_eq!(loaded.api_base, "http://localhost:9000/v1beta");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let parsed: FixConfig = serde_json::from_str(r#"{"model":"m"}"#).unwrap();
        assert_eq!(parsed.model, "m");
        assert_eq!(parsed.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), "{").unwrap();
        assert!(matches!(
            FixConfig::load(temp.path()),
            Err(FixError::Serialization(_))
        ));
    }
}
