//! Domain layer - Core business logic
//!
//! Contains value objects, selection policy, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod pack;
pub mod platform;
pub mod selection;
pub mod state;

// Re-export common types
pub use config::{EngineConfig, HookConfig, Volume};
pub use error::*;
pub use pack::PackManifest;
pub use platform::Platform;
pub use state::InvocationState;
