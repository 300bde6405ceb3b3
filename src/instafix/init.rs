use crate::config::{api_key_from_env, FixConfig};
use crate::controller::Controller;
use crate::error::{FixError, Result};
use crate::service::gemini::GeminiClient;
use crate::store::fs::FileStorage;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Overrides the data directory (saved fixes, theme, config).
pub const HOME_ENV: &str = "INSTAFIX_HOME";

pub type AppController = Controller<GeminiClient, FileStorage>;

pub struct FixContext {
    pub controller: AppController,
    pub config: FixConfig,
    pub data_dir: PathBuf,
}

/// Resolve the data directory: `$INSTAFIX_HOME`, else the platform data dir.
pub fn data_dir() -> Result<PathBuf> {
    if let Some(home) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "instafix", "instafix")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| FixError::Store("Could not determine data directory".to_string()))
}

/// Build the controller over file storage in `data_dir`. A missing API key is
/// not an error here; it surfaces on the first submission.
pub fn initialize_in(data_dir: &Path, api_key: Option<String>) -> Result<FixContext> {
    let config = FixConfig::load(data_dir)?;
    let client = GeminiClient::new(&config, api_key);
    let storage = FileStorage::new(data_dir.to_path_buf());

    log::debug!(
        "Using data dir {} (model {})",
        data_dir.display(),
        config.model
    );

    Ok(FixContext {
        controller: Controller::open(client, storage),
        config,
        data_dir: data_dir.to_path_buf(),
    })
}

/// Build the context from the environment (`.env` is honoured).
pub fn initialize() -> Result<FixContext> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            log::warn!("Ignoring unreadable .env file: {}", e);
        }
    }
    let dir = data_dir()?;
    initialize_in(&dir, api_key_from_env())
}
