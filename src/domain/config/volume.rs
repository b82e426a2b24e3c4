//! Volume value object

use std::fmt;

/// Volume used when the configured value is missing or unusable
pub const DEFAULT_VOLUME: f64 = 0.5;

/// Playback volume on the unit interval.
/// Immutable and clamped to `[0, 1]` on creation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Volume {
    fraction: f64,
}

impl Volume {
    /// Create a volume, clamping into `[0, 1]`.
    /// Non-finite input falls back to the default volume.
    pub fn new(fraction: f64) -> Self {
        if !fraction.is_finite() {
            return Self::default();
        }
        Self {
            fraction: fraction.clamp(0.0, 1.0),
        }
    }

    /// Full volume
    pub const fn max() -> Self {
        Self { fraction: 1.0 }
    }

    /// Get the volume as a fraction in `[0, 1]`
    pub const fn as_fraction(&self) -> f64 {
        self.fraction
    }

    /// Scale onto a player's native integer range `[0, full_scale]`.
    /// Truncates toward zero.
    pub fn scaled(&self, full_scale: u32) -> u32 {
        (self.fraction * f64::from(full_scale)) as u32
    }

    /// Volume as a whole percentage
    pub fn percent(&self) -> u32 {
        self.scaled(100)
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_VOLUME,
        }
    }
}

impl fmt::Display for Volume {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fraction)
    }
}
