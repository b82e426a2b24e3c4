//! JSON config file adapter

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::ConfigSource;
use crate::domain::config::EngineConfig;
use crate::domain::error::ConfigError;

/// Config file name inside the engine directory
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Configuration read from a JSON file
pub struct JsonConfigSource {
    path: PathBuf,
}

impl JsonConfigSource {
    /// Create a source for `config.json` inside the engine directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(CONFIG_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Parse JSON content into EngineConfig
    fn parse_json(content: &str) -> Result<EngineConfig, ConfigError> {
        serde_json::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl ConfigSource for JsonConfigSource {
    async fn load(&self) -> Result<EngineConfig, ConfigError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            // Return defaults if file doesn't exist
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(EngineConfig::defaults()),
            Err(e) => return Err(ConfigError::ReadError(e.to_string())),
        };

        Self::parse_json(&content)
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
