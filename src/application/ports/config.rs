//! Configuration port interface

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::config::EngineConfig;
use crate::domain::error::ConfigError;

/// Port for reading the engine configuration
#[async_trait]
pub trait ConfigSource: Send + Sync {
    /// Load configuration from storage.
    ///
    /// # Returns
    /// Defaults when the source does not exist, an error when it exists but
    /// cannot be read or parsed.
    async fn load(&self) -> Result<EngineConfig, ConfigError>;

    /// Location of the configuration
    fn path(&self) -> PathBuf;
}
