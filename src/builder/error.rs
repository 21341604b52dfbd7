//! Build errors for the store builder.

use crate::checkpoint::CheckpointError;
use thiserror::Error;

/// Errors that can occur when building a store.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) or .resume_from(checkpoint)")]
    MissingInitialState,

    #[error("Both an initial state and a checkpoint were given; use one")]
    ConflictingInitialState,

    #[error("History limit must be at least 1. Call .record_history(false) to disable history")]
    ZeroHistoryLimit,

    #[error("Checkpoint rejected: {0}")]
    Checkpoint(#[from] CheckpointError),
}
