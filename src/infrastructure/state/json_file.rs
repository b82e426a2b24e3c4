//! JSON file state store
//!
//! A missing, empty, unreadable or corrupt file loads as an empty state.
//! Writes go to a temp file in the same directory which then replaces the
//! state file, so a concurrent reader never sees a partial write. Concurrent
//! writers race and the last one wins.

use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tempfile::NamedTempFile;
use tokio::fs;

use crate::application::ports::StateStore;
use crate::domain::error::StateError;
use crate::domain::state::InvocationState;

/// State file name inside the engine directory
pub const STATE_FILE_NAME: &str = ".state.json";

/// Invocation state kept in a JSON file
pub struct JsonStateStore {
    path: PathBuf,
}

impl JsonStateStore {
    /// Create a store for `.state.json` inside the engine directory
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            path: dir.into().join(STATE_FILE_NAME),
        }
    }

    /// Create with custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<InvocationState, StateError> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(InvocationState::empty()),
            Err(e) => return Err(StateError::ReadError(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(InvocationState::empty());
        }

        serde_json::from_str(&content).map_err(|e| StateError::ParseError(e.to_string()))
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> Result<(), StateError> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(parent).map_err(|e| StateError::WriteError(e.to_string()))?;

    let mut temp_file =
        NamedTempFile::new_in(parent).map_err(|e| StateError::WriteError(e.to_string()))?;
    temp_file
        .write_all(content)
        .map_err(|e| StateError::WriteError(e.to_string()))?;
    temp_file
        .flush()
        .map_err(|e| StateError::WriteError(e.to_string()))?;
    temp_file
        .persist(path)
        .map_err(|e| StateError::WriteError(e.error.to_string()))?;

    Ok(())
}

#[async_trait]
impl StateStore for JsonStateStore {
    async fn load(&self) -> InvocationState {
        match self.read().await {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "Ignoring state file");
                InvocationState::empty()
            }
        }
    }

    async fn save(&self, state: &InvocationState) -> Result<(), StateError> {
        let content =
            serde_json::to_vec(state).map_err(|e| StateError::WriteError(e.to_string()))?;
        let path = self.path.clone();

        // Run file I/O in blocking thread, tempfile has no async API
        tokio::task::spawn_blocking(move || write_atomic(&path, &content))
            .await
            .map_err(|e| StateError::WriteError(format!("Task join error: {}", e)))?
    }

    fn path(&self) -> PathBuf {
        self.path.clone()
    }
}
