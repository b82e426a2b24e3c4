//! Engine directory resolution
//!
//! Config, state and packs all live in one directory, chosen once at
//! startup: explicit `--dir` / `PEON_PING_DIR`, else `WINDSURF_PEON_DIR`
//! as set by existing installs, else the directory holding the executable.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Directory variable read by existing hook installs
pub const LEGACY_DIR_ENV_VAR: &str = "WINDSURF_PEON_DIR";

/// Directory name used when the executable location is unknown
const FALLBACK_DIR_NAME: &str = "peon-ping";

/// Resolved engine directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineDir {
    root: PathBuf,
}

impl EngineDir {
    /// Use an explicit directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve from an optional override, then the legacy environment variable
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        Self::resolve_with(explicit, env::var_os(LEGACY_DIR_ENV_VAR))
    }

    fn resolve_with(explicit: Option<PathBuf>, legacy: Option<OsString>) -> Self {
        let chosen = explicit
            .filter(|d| !d.as_os_str().is_empty())
            .or_else(|| legacy.filter(|d| !d.is_empty()).map(PathBuf::from));
        if let Some(dir) = chosen {
            return Self::new(dir);
        }

        let exe_dir = env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(Path::to_path_buf));

        match exe_dir {
            Some(dir) => Self::new(dir),
            None => Self::new(
                dirs::data_dir()
                    .unwrap_or_else(|| PathBuf::from("."))
                    .join(FALLBACK_DIR_NAME),
            ),
        }
    }

    pub fn path(&self) -> &Path {
        &self.root
    }
}
