//! Detached player process

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::application::ports::AudioError;

/// A player invocation: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl PlayerCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append a file path argument
    pub fn path_arg(self, path: &Path) -> Self {
        let path = path.to_string_lossy().into_owned();
        self.arg(path)
    }

    /// Start the player with all stdio detached and return immediately.
    ///
    /// The child handle is dropped without waiting; the player keeps running
    /// after this process exits.
    pub fn spawn_detached(&self) -> Result<(), AudioError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AudioError::SpawnFailed {
                tool: self.program.clone(),
                message: e.to_string(),
            })?;

        drop(child);
        Ok(())
    }
}
