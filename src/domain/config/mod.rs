//! Engine configuration model

mod engine_config;
mod volume;

pub use engine_config::{
    AnnoyanceParams, EngineConfig, HookConfig, DEFAULT_ANNOYED_THRESHOLD,
    DEFAULT_ANNOYED_WINDOW_SECS, DEFAULT_PACK,
};
pub use volume::{Volume, DEFAULT_VOLUME};
