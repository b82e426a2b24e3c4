//! Sound pack adapters

mod directory;

pub use directory::{PackDirectory, PACKS_DIR_NAME};
