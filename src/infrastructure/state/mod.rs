//! State store adapters

mod json_file;

pub use json_file::{JsonStateStore, STATE_FILE_NAME};
