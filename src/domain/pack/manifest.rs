//! Sound pack manifest
//!
//! Categories parse independently: a malformed entry is skipped and a
//! malformed category reads as empty, so one bad category never silences
//! the rest of the pack.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

/// A single sound in a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoundEntry {
    /// File name relative to the pack's `sounds/` directory
    pub file: String,
}

impl SoundEntry {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into() }
    }

    /// Entry from a manifest object; anything besides a string `file` is ignored
    fn from_value(value: &Value) -> Option<Self> {
        value.get("file").and_then(Value::as_str).map(Self::new)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Value")]
pub struct SoundCategory {
    pub sounds: Vec<SoundEntry>,
}

impl From<Value> for SoundCategory {
    fn from(value: Value) -> Self {
        let sounds = value
            .get("sounds")
            .and_then(Value::as_array)
            .map(|items| items.iter().filter_map(SoundEntry::from_value).collect())
            .unwrap_or_default();
        Self { sounds }
    }
}

/// Index of a sound pack: category name to its sounds.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PackManifest {
    #[serde(default)]
    pub categories: HashMap<String, SoundCategory>,
}

impl PackManifest {
    /// Add a category with the given sound files
    pub fn with_category<I, S>(mut self, name: impl Into<String>, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let sounds = files.into_iter().map(SoundEntry::new).collect();
        self.categories
            .insert(name.into(), SoundCategory { sounds });
        self
    }

    /// Sounds for a category. Missing categories have no sounds.
    pub fn sounds(&self, category: &str) -> &[SoundEntry] {
        self.categories
            .get(category)
            .map(|c| c.sounds.as_slice())
            .unwrap_or(&[])
    }
}
