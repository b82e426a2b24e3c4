//! Audio playback adapters
//!
//! One adapter per external player, plus detection that picks the first
//! player available on the host platform.

mod afplay;
mod aplay;
mod command;
mod factory;
mod ffplay;
mod mpv;
mod paplay;
mod powershell;

pub use afplay::AfplayPlayer;
pub use aplay::AplayPlayer;
pub use command::PlayerCommand;
pub use factory::{
    candidates, create_player, detect_player, DetectingAudioBackend, PlayerTool, ToolProbe,
    WhichProbe,
};
pub use ffplay::FfplayPlayer;
pub use mpv::MpvPlayer;
pub use paplay::PaplayPlayer;
pub use powershell::{PathStyle, PowerShellPlayer};
