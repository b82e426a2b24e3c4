//! Application layer - Use cases and port interfaces
//!
//! Contains the invocation controller and trait definitions
//! for external system interactions.

pub mod play_hook;
pub mod ports;

// Re-export use cases
pub use play_hook::{PlayHookInput, PlayHookOutcome, PlayHookUseCase};
