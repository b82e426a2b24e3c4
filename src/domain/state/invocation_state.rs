//! Cross-invocation state record

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Durable state shared by every invocation of one engine instance.
///
/// Serialized as:
///
/// ```json
/// { "prompt_timestamps": [1718000000.1], "last_played": { "annoyed": "what.wav" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvocationState {
    /// Epoch seconds of recent invocations that requested the annoyed category
    #[serde(default)]
    pub prompt_timestamps: Vec<f64>,
    /// Last sound file played, per category
    #[serde(default)]
    pub last_played: BTreeMap<String, String>,
}

impl InvocationState {
    /// Empty state (cold start)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Last sound file played for a category
    pub fn last_played(&self, category: &str) -> Option<&str> {
        self.last_played.get(category).map(String::as_str)
    }

    /// Record the sound just picked for a category
    pub fn record_played(&mut self, category: impl Into<String>, file: impl Into<String>) {
        self.last_played.insert(category.into(), file.into());
    }

    /// Drop timestamps older than the window, then record `now`.
    /// Returns the number of timestamps inside the window, including `now`.
    pub fn push_timestamp(&mut self, now: f64, window_secs: f64) -> usize {
        self.prompt_timestamps.retain(|t| now - t < window_secs);
        self.prompt_timestamps.push(now);
        self.prompt_timestamps.len()
    }
}
