//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the file system, stdin and external audio players.

pub mod audio;
pub mod config;
pub mod pack;
pub mod payload;
pub mod state;

// Re-export adapters
pub use audio::{DetectingAudioBackend, PlayerTool};
pub use config::JsonConfigSource;
pub use pack::PackDirectory;
pub use payload::StdinPayload;
pub use state::JsonStateStore;
