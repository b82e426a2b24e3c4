//! Invocation state store port

use std::path::PathBuf;

use async_trait::async_trait;

use crate::domain::error::StateError;
use crate::domain::state::InvocationState;

/// Port for the durable cross-invocation state.
///
/// `load` never fails: a missing, unreadable or corrupt store reads as an
/// empty state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the current state
    async fn load(&self) -> InvocationState;

    /// Overwrite the stored state
    async fn save(&self, state: &InvocationState) -> Result<(), StateError>;

    /// Location of the store
    fn path(&self) -> PathBuf;
}
