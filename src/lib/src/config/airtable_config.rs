use crate::constants::{
    API_KEY_ENV_VAR, BASE_ID_ENV_VAR, CONFIG_DIR, CONFIG_FILENAME, CONFIG_PATH_ENV_VAR,
    DEFAULT_HOST, TABLE_ID_ENV_VAR,
};
use crate::error::AirsyncError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Credentials and identifiers for the table being synced. Never hardcoded:
/// values come from the environment (API_KEY, BASE_ID, TABLE_ID) or from the
/// config file written by `airsync config`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AirtableConfig {
    pub api_key: String,
    pub base_id: String,
    pub table_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
}

impl AirtableConfig {
    pub fn new(path: &Path) -> Result<AirtableConfig, AirsyncError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    fn new_empty() -> AirtableConfig {
        AirtableConfig {
            api_key: String::from(""),
            base_id: String::from(""),
            table_id: String::from(""),
            host: None,
        }
    }

    /// Load the config file if there is one, then let the environment
    /// override individual values. Errors unless an API key, base id and
    /// table id all ended up set.
    pub fn get() -> Result<AirtableConfig, AirsyncError> {
        let config_file = Self::config_file_path()?;
        log::debug!("looking for config file in...{:?}", config_file);
        let mut config = if config_file.exists() {
            AirtableConfig::new(&config_file)?
        } else {
            AirtableConfig::new_empty()
        };

        if let Ok(api_key) = std::env::var(API_KEY_ENV_VAR) {
            config.api_key = api_key;
        }
        if let Ok(base_id) = std::env::var(BASE_ID_ENV_VAR) {
            config.base_id = base_id;
        }
        if let Ok(table_id) = std::env::var(TABLE_ID_ENV_VAR) {
            config.table_id = table_id;
        }

        if config.api_key.is_empty() || config.base_id.is_empty() || config.table_id.is_empty() {
            return Err(AirsyncError::credentials_not_set());
        }

        Ok(config)
    }

    /// The stored config, or an empty one to fill in. Used by `airsync
    /// config`, which must be able to run before credentials are complete.
    pub fn get_or_create() -> Result<AirtableConfig, AirsyncError> {
        let config_file = Self::config_file_path()?;
        if config_file.exists() {
            AirtableConfig::new(&config_file)
        } else {
            Ok(AirtableConfig::new_empty())
        }
    }

    pub fn api_url(&self) -> String {
        match &self.host {
            Some(host) => host.to_owned(),
            None => String::from(DEFAULT_HOST),
        }
    }

    pub fn config_file_path() -> Result<PathBuf, AirsyncError> {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV_VAR) {
            return Ok(PathBuf::from(path));
        }
        let home_dir = dirs::home_dir().ok_or_else(AirsyncError::home_dir_not_found)?;
        Ok(home_dir.join(CONFIG_DIR).join(CONFIG_FILENAME))
    }

    pub fn save_default(&self) -> Result<PathBuf, AirsyncError> {
        let config_file = Self::config_file_path()?;
        log::debug!("Saving config to {:?}", config_file);
        if let Some(config_dir) = config_file.parent() {
            if !config_dir.exists() {
                fs::create_dir_all(config_dir)?;
            }
        }
        self.save(&config_file)?;
        Ok(config_file)
    }

    pub fn save(&self, path: &Path) -> Result<(), AirsyncError> {
        let toml = toml::to_string(&self)?;
        fs::write(path, toml)?;
        Ok(())
    }
}
