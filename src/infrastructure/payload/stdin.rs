//! Stdin payload adapter

use async_trait::async_trait;
use tokio::io::{self, AsyncRead};
use tokio::sync::Mutex;

use crate::application::ports::{HookPayload, PayloadError};

/// Drains the JSON payload the host writes to the engine's stdin.
pub struct StdinPayload<R = io::Stdin> {
    reader: Mutex<R>,
}

impl StdinPayload {
    /// Read from the process stdin
    pub fn new() -> Self {
        Self::from_reader(io::stdin())
    }
}

impl Default for StdinPayload {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> StdinPayload<R>
where
    R: AsyncRead + Unpin + Send,
{
    /// Read from any async reader
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

#[async_trait]
impl<R> HookPayload for StdinPayload<R>
where
    R: AsyncRead + Unpin + Send,
{
    async fn drain(&self) -> Result<u64, PayloadError> {
        let mut reader = self.reader.lock().await;
        io::copy(&mut *reader, &mut io::sink())
            .await
            .map_err(|e| PayloadError::ReadFailed(e.to_string()))
    }
}
