//! Server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults.

use std::env;
use std::path::PathBuf;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP listen port.
    pub port: u16,

    /// Path of the persisted state document.
    pub data_file: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// ## Environment Variables
    /// - `PORT`: HTTP listen port (default: 5000)
    /// - `MINIMART_DATA_FILE`: state document path (default: db.json)
    pub fn load() -> Result<Self, ConfigError> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse()
            .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?;

        let data_file = env::var("MINIMART_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("db.json"));

        Ok(ServerConfig { port, data_file })
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
