//! Rapid-invocation ("annoyed") detector
//!
//! Hooks that list the `annoyed` category only play it once they have been
//! invoked `threshold` times within a trailing window of `window_secs`.
//! Below the threshold the category is dropped from the candidates. The
//! window is time bounded, not count bounded: entries age out continuously
//! and a burst trips the detector even on a fresh state.

use crate::domain::config::AnnoyanceParams;
use crate::domain::state::InvocationState;

/// Sentinel category driven by the detector
pub const ANNOYED_CATEGORY: &str = "annoyed";

/// Result of resolving a hook's requested categories
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryResolution {
    /// Categories to sample from. Empty means play nothing.
    pub effective: Vec<String>,
    /// Whether the timestamp history was pruned and appended
    pub history_updated: bool,
}

impl CategoryResolution {
    /// True when the detector forced the annoyed category
    pub fn is_annoyed(&self) -> bool {
        self.history_updated && self.effective == [ANNOYED_CATEGORY]
    }
}

/// Detector configured with one invocation's parameters
#[derive(Debug, Clone, Copy)]
pub struct AnnoyanceDetector {
    params: AnnoyanceParams,
}

impl AnnoyanceDetector {
    pub fn new(params: AnnoyanceParams) -> Self {
        Self { params }
    }

    /// Resolve the effective categories for an invocation at `now` (epoch seconds).
    ///
    /// Only touches `state.prompt_timestamps` when `requested` contains the
    /// annoyed category; in that case the history must be persisted whatever
    /// the outcome.
    pub fn resolve(
        &self,
        requested: &[String],
        state: &mut InvocationState,
        now: f64,
    ) -> CategoryResolution {
        if !requested.iter().any(|c| c == ANNOYED_CATEGORY) {
            return CategoryResolution {
                effective: requested.to_vec(),
                history_updated: false,
            };
        }

        let count = state.push_timestamp(now, self.params.window_secs);

        let effective = if count >= self.params.threshold as usize {
            vec![ANNOYED_CATEGORY.to_string()]
        } else {
            requested
                .iter()
                .filter(|c| *c != ANNOYED_CATEGORY)
                .cloned()
                .collect()
        };

        CategoryResolution {
            effective,
            history_updated: true,
        }
    }
}
