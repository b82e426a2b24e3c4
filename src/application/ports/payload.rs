//! Hook payload port interface

use async_trait::async_trait;
use thiserror::Error;

/// Payload errors
#[derive(Debug, Clone, Error)]
pub enum PayloadError {
    #[error("Failed to read hook payload: {0}")]
    ReadFailed(String),
}

/// Port for the payload the host sends along with a hook invocation.
/// The contents carry no meaning for sound selection.
#[async_trait]
pub trait HookPayload: Send + Sync {
    /// Consume the payload completely.
    ///
    /// # Returns
    /// Number of bytes discarded
    async fn drain(&self) -> Result<u64, PayloadError>;
}
