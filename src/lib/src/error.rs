//! Errors for the airsync library
//!
//! Enumeration for all errors that can occur while talking to the Airtable
//! API or reading local configuration.
//!

use derive_more::{Display, Error};
use std::io;

pub mod request_failure;
pub mod string_error;

pub use crate::error::request_failure::RequestFailure;
pub use crate::error::string_error::StringError;

pub const CREDENTIALS_NOT_FOUND: &str =
    "airtable credentials not found, set API_KEY, BASE_ID and TABLE_ID or configure with:\n\n  airsync config --api-key <KEY> --base <BASE_ID> --table <TABLE_ID>\n";

#[derive(Debug, Display, Error)]
pub enum AirsyncError {
    // Config
    ConfigNotFound(Box<StringError>),

    // Remote service said no: non-2xx status with the body it sent back
    RequestFailed(Box<RequestFailure>),

    // External Library Errors
    IO(io::Error),
    TomlSer(toml::ser::Error),
    TomlDe(toml::de::Error),
    JSON(serde_json::Error),
    HTTP(reqwest::Error),
    ENV(std::env::VarError),

    // Fallback
    Basic(StringError),
}

impl AirsyncError {
    pub fn basic_str(s: impl AsRef<str>) -> Self {
        AirsyncError::Basic(StringError::from(s.as_ref()))
    }

    pub fn credentials_not_set() -> Self {
        AirsyncError::ConfigNotFound(Box::new(StringError::from(CREDENTIALS_NOT_FOUND)))
    }

    pub fn request_failed(url: impl AsRef<str>, status: u16, body: impl AsRef<str>) -> Self {
        AirsyncError::RequestFailed(Box::new(RequestFailure::new(url, status, body)))
    }

    pub fn home_dir_not_found() -> Self {
        AirsyncError::basic_str("Home directory not found")
    }

    /// HTTP status code, when the error came back from the service.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            AirsyncError::RequestFailed(failure) => Some(failure.status),
            _ => None,
        }
    }
}

impl From<io::Error> for AirsyncError {
    fn from(error: io::Error) -> Self {
        AirsyncError::IO(error)
    }
}

impl From<String> for AirsyncError {
    fn from(error: String) -> Self {
        AirsyncError::Basic(StringError::from(error))
    }
}

impl From<toml::ser::Error> for AirsyncError {
    fn from(error: toml::ser::Error) -> Self {
        AirsyncError::TomlSer(error)
    }
}

impl From<toml::de::Error> for AirsyncError {
    fn from(error: toml::de::Error) -> Self {
        AirsyncError::TomlDe(error)
    }
}

impl From<serde_json::Error> for AirsyncError {
    fn from(error: serde_json::Error) -> Self {
        AirsyncError::JSON(error)
    }
}

impl From<reqwest::Error> for AirsyncError {
    fn from(error: reqwest::Error) -> Self {
        AirsyncError::HTTP(error)
    }
}

impl From<std::env::VarError> for AirsyncError {
    fn from(error: std::env::VarError) -> Self {
        AirsyncError::ENV(error)
    }
}
