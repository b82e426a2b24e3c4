//! afplay adapter (macOS)

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;

use super::command::PlayerCommand;

/// macOS built-in player. Volume is a linear gain where 1 is unchanged.
pub struct AfplayPlayer;

impl AfplayPlayer {
    /// Create a new afplay adapter
    pub fn new() -> Self {
        Self
    }

    pub fn command(&self, path: &Path, volume: Volume) -> PlayerCommand {
        PlayerCommand::new("afplay")
            .arg("-v")
            .arg(volume.to_string())
            .path_arg(path)
    }
}

impl Default for AfplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioBackend for AfplayPlayer {
    fn name(&self) -> &str {
        "afplay"
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        self.command(path, volume).spawn_detached()
    }
}
