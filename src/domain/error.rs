//! Domain error types

use thiserror::Error;

/// Error when loading the engine configuration
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),
}

/// Error when loading or saving the invocation state file
#[derive(Debug, Clone, Error)]
pub enum StateError {
    #[error("Failed to read state file: {0}")]
    ReadError(String),

    #[error("Failed to parse state file: {0}")]
    ParseError(String),

    #[error("Failed to write state file: {0}")]
    WriteError(String),
}

/// Error when loading a sound pack manifest
#[derive(Debug, Clone, Error)]
pub enum ManifestError {
    #[error("Sound pack not found: {0}")]
    NotFound(String),

    #[error("Failed to read manifest: {0}")]
    ReadError(String),

    #[error("Failed to parse manifest: {0}")]
    ParseError(String),

    #[error("Invalid pack name: \"{0}\"")]
    InvalidPackName(String),
}
