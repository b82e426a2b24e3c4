//! aplay adapter (ALSA)

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;

use super::command::PlayerCommand;

/// ALSA player. Has no volume option, so it always plays at full level.
pub struct AplayPlayer;

impl AplayPlayer {
    /// Create a new aplay adapter
    pub fn new() -> Self {
        Self
    }

    pub fn command(&self, path: &Path, _volume: Volume) -> PlayerCommand {
        PlayerCommand::new("aplay").arg("-q").path_arg(path)
    }
}

impl Default for AplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioBackend for AplayPlayer {
    fn name(&self) -> &str {
        "aplay"
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        self.command(path, volume).spawn_detached()
    }
}
