//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod audio_backend;
pub mod config;
pub mod payload;
pub mod sound_pack;
pub mod state_store;

// Re-export common types
pub use audio_backend::{AudioBackend, AudioError};
pub use config::ConfigSource;
pub use payload::{HookPayload, PayloadError};
pub use sound_pack::SoundPackSource;
pub use state_store::StateStore;
