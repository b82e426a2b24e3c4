//! Category resolution and sound selection policy

mod annoyance;
mod sound;

pub use annoyance::{AnnoyanceDetector, CategoryResolution, ANNOYED_CATEGORY};
pub use sound::{pick_category, pick_sound, select_sound};
