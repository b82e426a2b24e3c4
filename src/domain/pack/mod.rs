//! Sound pack model

mod manifest;

pub use manifest::{PackManifest, SoundCategory, SoundEntry};
