//! paplay adapter (PulseAudio / PipeWire)

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{AudioBackend, AudioError};
use crate::domain::config::Volume;

use super::command::PlayerCommand;

/// PulseAudio volume that leaves the stream unscaled
const PA_VOLUME_NORM: u32 = 65536;

/// PulseAudio/PipeWire player, the common case on desktop Linux
pub struct PaplayPlayer;

impl PaplayPlayer {
    /// Create a new paplay adapter
    pub fn new() -> Self {
        Self
    }

    pub fn command(&self, path: &Path, volume: Volume) -> PlayerCommand {
        PlayerCommand::new("paplay")
            .arg("--volume")
            .arg(volume.scaled(PA_VOLUME_NORM).to_string())
            .path_arg(path)
    }
}

impl Default for PaplayPlayer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AudioBackend for PaplayPlayer {
    fn name(&self) -> &str {
        "paplay"
    }

    async fn play(&self, path: &Path, volume: Volume) -> Result<(), AudioError> {
        self.command(path, volume).spawn_detached()
    }
}
