//! Audio backend port for sound file playback

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::config::Volume;

/// Errors that can occur when starting playback
#[derive(Error, Debug)]
pub enum AudioError {
    /// No supported player is installed for this platform
    #[error("No audio player available on {0}")]
    NoPlayerAvailable(String),

    /// The file path could not be translated for the player
    #[error("Path translation failed: {0}")]
    PathTranslation(String),

    /// The player process could not be started
    #[error("Failed to start {tool}: {message}")]
    SpawnFailed { tool: String, message: String },
}

/// Port trait for fire-and-forget playback.
///
/// `play` returns as soon as the player has been started; it never waits
/// for playback to finish.
#[async_trait]
pub trait AudioBackend: Send + Sync {
    /// Short name of the player, for logs
    fn name(&self) -> &str;

    /// Start playing a sound file at the given volume
    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError>;
}

/// Blanket implementation for boxed backend types
#[async_trait]
impl AudioBackend for Box<dyn AudioBackend> {
    fn name(&self) -> &str {
        self.as_ref().name()
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        self.as_ref().play(path, volume).await
    }
}
