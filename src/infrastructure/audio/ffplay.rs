//! ffplay adapter

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;

use super::command::PlayerCommand;

/// FFmpeg's player, volume in percent
pub struct FfplayPlayer;

impl FfplayPlayer {
    /// Create a new ffplay adapter
    pub fn new() -> Self {
        Self
    }

    pub fn command(&self, path: &Path, volume: Volume) -> PlayerCommand {
        PlayerCommand::new("ffplay")
            .arg("-nodisp")
            .arg("-autoexit")
            .arg("-volume")
            .arg(volume.percent().to_string())
            .path_arg(path)
    }
}

impl Default for FfplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioBackend for FfplayPlayer {
    fn name(&self) -> &str {
        "ffplay"
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        self.command(path, volume).spawn_detached()
    }
}
