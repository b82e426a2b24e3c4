//! Engine configuration value object
//!
//! Parsing is lenient field by field: a value of the wrong type or outside
//! its valid range falls back to that field's default instead of rejecting
//! the whole file.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use super::volume::Volume;

/// Sound pack used when none is configured
pub const DEFAULT_PACK: &str = "peon";

/// Rapid invocations needed to trigger the annoyed category
pub const DEFAULT_ANNOYED_THRESHOLD: u32 = 3;

/// Sliding window for rapid invocation detection, in seconds
pub const DEFAULT_ANNOYED_WINDOW_SECS: f64 = 10.0;

/// Parameters for the rapid-invocation detector
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnoyanceParams {
    /// Invocations within the window that trigger the annoyed category (>= 1)
    pub threshold: u32,
    /// Window length in seconds (> 0)
    pub window_secs: f64,
}

impl Default for AnnoyanceParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_ANNOYED_THRESHOLD,
            window_secs: DEFAULT_ANNOYED_WINDOW_SECS,
        }
    }
}

/// Per-hook configuration
#[derive(Debug, Clone, PartialEq)]
pub struct HookConfig {
    pub enabled: bool,
    pub categories: Vec<String>,
}

impl HookConfig {
    /// Create an enabled hook with the given categories
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            enabled: true,
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Same hook, disabled
    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    fn from_value(value: &Value) -> Self {
        let Some(fields) = value.as_object() else {
            return Self::new(Vec::<String>::new());
        };

        Self {
            enabled: lenient_bool(fields.get("enabled"), true),
            categories: fields
                .get("categories")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Engine configuration, loaded fresh on every invocation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct EngineConfig {
    pub enabled: bool,
    pub volume: Volume,
    pub active_pack: String,
    pub annoyance: AnnoyanceParams,
    pub hooks: HashMap<String, HookConfig>,
}

impl EngineConfig {
    /// Configuration with every field at its default (no hooks)
    pub fn defaults() -> Self {
        Self {
            enabled: true,
            volume: Volume::default(),
            active_pack: DEFAULT_PACK.to_string(),
            annoyance: AnnoyanceParams::default(),
            hooks: HashMap::new(),
        }
    }

    /// Add or replace a hook
    pub fn with_hook(mut self, name: impl Into<String>, hook: HookConfig) -> Self {
        self.hooks.insert(name.into(), hook);
        self
    }

    /// Look up a hook by name
    pub fn hook(&self, name: &str) -> Option<&HookConfig> {
        self.hooks.get(name)
    }

    /// Categories for a hook that is known, enabled and has at least one
    /// category configured.
    pub fn active_categories(&self, hook_name: &str) -> Option<&[String]> {
        self.hook(hook_name)
            .filter(|hook| hook.enabled && !hook.categories.is_empty())
            .map(|hook| hook.categories.as_slice())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::defaults()
    }
}

impl From<Map<String, Value>> for EngineConfig {
    fn from(fields: Map<String, Value>) -> Self {
        let defaults = Self::defaults();

        let volume = fields
            .get("volume")
            .and_then(Value::as_f64)
            .map(Volume::new)
            .unwrap_or(defaults.volume);

        let active_pack = fields
            .get("active_pack")
            .and_then(Value::as_str)
            .filter(|name| !name.trim().is_empty())
            .map(str::to_string)
            .unwrap_or(defaults.active_pack);

        let threshold = fields
            .get("annoyed_threshold")
            .and_then(whole_number)
            .filter(|n| *n >= 1)
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(DEFAULT_ANNOYED_THRESHOLD);

        let window_secs = fields
            .get("annoyed_window_seconds")
            .and_then(Value::as_f64)
            .filter(|secs| secs.is_finite() && *secs > 0.0)
            .unwrap_or(DEFAULT_ANNOYED_WINDOW_SECS);

        let hooks = fields
            .get("hooks")
            .and_then(Value::as_object)
            .map(|hooks| {
                hooks
                    .iter()
                    .map(|(name, hook)| (name.clone(), HookConfig::from_value(hook)))
                    .collect()
            })
            .unwrap_or_default();

        Self {
            enabled: lenient_bool(fields.get("enabled"), defaults.enabled),
            volume,
            active_pack,
            annoyance: AnnoyanceParams {
                threshold,
                window_secs,
            },
            hooks,
        }
    }
}

/// Only a real JSON boolean counts; anything else is the default.
fn lenient_bool(value: Option<&Value>, default: bool) -> bool {
    value.and_then(Value::as_bool).unwrap_or(default)
}

/// Accept integers and floats with no fractional part.
fn whole_number(value: &Value) -> Option<u64> {
    if let Some(n) = value.as_u64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
        .map(|f| f as u64)
}
