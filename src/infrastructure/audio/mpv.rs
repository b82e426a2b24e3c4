//! mpv adapter

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;

use super::command::PlayerCommand;

/// mpv media player, volume in percent
pub struct MpvPlayer;

impl MpvPlayer {
    /// Create a new mpv adapter
    pub fn new() -> Self {
        Self
    }

    pub fn command(&self, path: &Path, volume: Volume) -> PlayerCommand {
        PlayerCommand::new("mpv")
            .arg("--no-video")
            .arg(format!("--volume={}", volume.percent()))
            .path_arg(path)
    }
}

impl Default for MpvPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioBackend for MpvPlayer {
    fn name(&self) -> &str {
        "mpv"
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        self.command(path, volume).spawn_detached()
    }
}
