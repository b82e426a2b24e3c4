//! CLI layer - Command-line interface
//!
//! Contains argument parsing, engine directory resolution, logging setup,
//! and the invocation runner.

pub mod app;
pub mod args;
pub mod engine_dir;
pub mod logging;

// Re-export commonly used types
pub use app::{run_hook, EXIT_SUCCESS};
pub use args::{Cli, HookOptions};
pub use engine_dir::EngineDir;
