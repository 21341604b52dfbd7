//! Checkpoint and resume functionality for stores.
//!
//! A checkpoint captures a store's initial state, current state, dispatch
//! history and counters so the store can be rebuilt after a restart.
//! Subscribers and queued actions are not part of a checkpoint.

use crate::core::{Action, Reducer, State, StateHistory};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Bookkeeping tracked by a store
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StoreMetadata {
    /// When the store was created
    pub created_at: DateTime<Utc>,

    /// Last time an action was applied
    pub updated_at: DateTime<Utc>,

    /// Number of applied actions; also the sequence number of the last one
    pub dispatch_count: u64,

    /// Number of raw actions ignored as unrecognized
    pub ignored_count: u64,
}

impl Default for StoreMetadata {
    fn default() -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            dispatch_count: 0,
            ignored_count: 0,
        }
    }
}

/// Serializable snapshot of a store.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Checkpoint<S: State, A: Action> {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State the store was created with
    pub initial_state: S,

    /// State at the time of the checkpoint
    pub current_state: S,

    /// Recorded dispatch history
    pub history: StateHistory<S, A>,

    /// Store metadata
    pub metadata: StoreMetadata,
}

impl<S: State, A: Action> Checkpoint<S, A> {
    /// Create a checkpoint with a fresh id and the current time.
    pub fn new(
        initial_state: S,
        current_state: S,
        history: StateHistory<S, A>,
        metadata: StoreMetadata,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            initial_state,
            current_state,
            history,
            metadata,
        }
    }

    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| encode_error("JSON", e))
    }

    pub fn to_json_pretty(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self).map_err(|e| encode_error("JSON", e))
    }

    /// Decode a JSON checkpoint, rejecting unsupported versions.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json).map_err(|e| decode_error("JSON", e))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| encode_error("binary", e))
    }

    /// Decode a binary checkpoint, rejecting unsupported versions.
    pub fn from_binary(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes).map_err(|e| decode_error("binary", e))?;
        checkpoint.check_version()?;
        Ok(checkpoint)
    }

    fn check_version(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }
        Ok(())
    }

    /// Check that the checkpoint is consistent under `reducer`.
    ///
    /// - the version is supported
    /// - the history holds no more records than were dispatched
    /// - with no dispatches, the current state is the initial state
    /// - the newest record carries the last sequence number
    /// - a complete history starts at the initial state
    /// - records are consecutive and each starts where the previous ended
    /// - each record's action reduces its `from` state to its `to` state
    /// - the newest record ends at the current state
    pub fn validate<R>(&self, reducer: &R) -> Result<(), CheckpointError>
    where
        R: Reducer<State = S, Action = A>,
    {
        self.check_version()?;

        let dispatched = self.metadata.dispatch_count;
        let recorded = self.history.len() as u64;
        if recorded > dispatched {
            return Err(CheckpointError::HistoryExceedsDispatchCount {
                recorded,
                dispatched,
            });
        }

        let records = self.history.records();
        let (Some(first), Some(last)) = (records.front(), records.back()) else {
            // History may be disabled, so only an untouched store can be checked
            if dispatched == 0 && self.current_state != self.initial_state {
                return Err(CheckpointError::StateChangedWithoutDispatch {
                    initial: format!("{:?}", self.initial_state),
                    current: format!("{:?}", self.current_state),
                });
            }
            return Ok(());
        };

        if last.sequence != dispatched {
            return Err(CheckpointError::LastSequenceMismatch {
                last: last.sequence,
                dispatched,
            });
        }

        if recorded == dispatched && first.from != self.initial_state {
            return Err(CheckpointError::InitialStateMismatch {
                initial: format!("{:?}", self.initial_state),
                found: format!("{:?}", first.from),
            });
        }

        for (previous, next) in records.iter().zip(records.iter().skip(1)) {
            if previous.sequence.checked_add(1) != Some(next.sequence) {
                return Err(CheckpointError::SequenceGap {
                    previous: previous.sequence,
                    found: next.sequence,
                });
            }
            if next.from != previous.to {
                return Err(CheckpointError::BrokenChain {
                    sequence: next.sequence,
                    from: format!("{:?}", next.from),
                    previous_to: format!("{:?}", previous.to),
                });
            }
        }

        for record in records {
            let reduced = reducer.reduce(&record.from, &record.action);
            if reduced != record.to {
                return Err(CheckpointError::ReplayMismatch {
                    sequence: record.sequence,
                    recorded: format!("{:?}", record.to),
                    reduced: format!("{:?}", reduced),
                });
            }
        }

        if last.to != self.current_state {
            return Err(CheckpointError::CurrentStateMismatch {
                recorded: format!("{:?}", last.to),
                current: format!("{:?}", self.current_state),
            });
        }

        Ok(())
    }
}

fn encode_error(format: &'static str, error: impl ToString) -> CheckpointError {
    CheckpointError::Encode {
        format,
        message: error.to_string(),
    }
}

fn decode_error(format: &'static str, error: impl ToString) -> CheckpointError {
    CheckpointError::Decode {
        format,
        message: error.to_string(),
    }
}
