//! Checkpoint error types.

use thiserror::Error;

/// Errors that can occur when encoding, decoding or validating a store
/// checkpoint. States are reported in their `Debug` form.
#[derive(Debug, Error)]
pub enum CheckpointError {
    #[error("Failed to encode checkpoint as {format}: {message}")]
    Encode {
        format: &'static str,
        message: String,
    },

    #[error("Failed to decode {format} checkpoint: {message}")]
    Decode {
        format: &'static str,
        message: String,
    },

    #[error("Unsupported checkpoint version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    #[error("History holds {recorded} records but only {dispatched} actions were dispatched")]
    HistoryExceedsDispatchCount { recorded: u64, dispatched: u64 },

    #[error("No action was dispatched, yet the state moved from {initial} to {current}")]
    StateChangedWithoutDispatch { initial: String, current: String },

    #[error("Complete history starts at {found}, but the initial state is {initial}")]
    InitialStateMismatch { initial: String, found: String },

    #[error("Newest record has sequence {last}, but {dispatched} actions were dispatched")]
    LastSequenceMismatch { last: u64, dispatched: u64 },

    #[error("Record sequence jumps from {previous} to {found}")]
    SequenceGap { previous: u64, found: u64 },

    #[error("Record {sequence} starts at {from}, but the previous record ended at {previous_to}")]
    BrokenChain {
        sequence: u64,
        from: String,
        previous_to: String,
    },

    #[error("Record {sequence} ends at {recorded}, but its action reduces to {reduced}")]
    ReplayMismatch {
        sequence: u64,
        recorded: String,
        reduced: String,
    },

    #[error("Newest record ends at {recorded}, but the current state is {current}")]
    CurrentStateMismatch { recorded: String, current: String },
}
