//! Configuration adapters

mod json_file;

pub use json_file::{JsonConfigSource, CONFIG_FILE_NAME};
