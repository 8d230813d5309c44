// Airtable API
pub const DEFAULT_HOST: &str = "https://api.airtable.com";
pub const API_NAMESPACE: &str = "v0";
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

// Config file location, relative to the home directory
pub const CONFIG_DIR: &str = ".airsync";
pub const CONFIG_FILENAME: &str = "airsync.toml";

// Environment overrides
pub const API_KEY_ENV_VAR: &str = "API_KEY";
pub const BASE_ID_ENV_VAR: &str = "BASE_ID";
pub const TABLE_ID_ENV_VAR: &str = "TABLE_ID";
pub const CONFIG_PATH_ENV_VAR: &str = "AIRSYNC_CONFIG";

pub const AIRSYNC_VERSION: &str = env!("CARGO_PKG_VERSION");
