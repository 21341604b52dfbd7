//! Builder for constructing stores.

use crate::builder::error::BuildError;
use crate::checkpoint::{Checkpoint, StoreMetadata};
use crate::core::{Reducer, StateHistory};
use crate::store::Store;

/// Builder for constructing stores with a fluent API.
pub struct StoreBuilder<R: Reducer> {
    reducer: R,
    initial: Option<R::State>,
    checkpoint: Option<Checkpoint<R::State, R::Action>>,
    record_history: bool,
    history_limit: Option<usize>,
}

impl<R: Reducer> StoreBuilder<R> {
    /// Create a new builder around `reducer`.
    pub fn new(reducer: R) -> Self {
        Self {
            reducer,
            initial: None,
            checkpoint: None,
            record_history: true,
            history_limit: None,
        }
    }

    /// Set the initial state.
    pub fn initial(mut self, state: R::State) -> Self {
        self.initial = Some(state);
        self
    }

    /// Start from a checkpoint instead of an initial state.
    pub fn resume_from(mut self, checkpoint: Checkpoint<R::State, R::Action>) -> Self {
        self.checkpoint = Some(checkpoint);
        self
    }

    /// Enable or disable history recording. Enabled by default.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Keep at most `limit` history records.
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.history_limit = Some(limit);
        self
    }

    /// Set or clear the history limit.
    pub fn maybe_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Build the store.
    /// Returns an error if the starting point is missing or ambiguous, or
    /// the checkpoint fails validation.
    pub fn build(self) -> Result<Store<R>, BuildError> {
        if self.history_limit == Some(0) {
            return Err(BuildError::ZeroHistoryLimit);
        }

        let mut store = match (self.initial, self.checkpoint) {
            (Some(_), Some(_)) => return Err(BuildError::ConflictingInitialState),
            (None, None) => return Err(BuildError::MissingInitialState),
            (Some(initial), None) => Store::from_parts(
                self.reducer,
                initial.clone(),
                initial,
                StateHistory::new(),
                StoreMetadata::default(),
            ),
            (None, Some(checkpoint)) => {
                checkpoint.validate(&self.reducer)?;
                Store::from_parts(
                    self.reducer,
                    checkpoint.initial_state,
                    checkpoint.current_state,
                    checkpoint.history,
                    checkpoint.metadata,
                )
            }
        };

        store.configure_history(self.record_history, self.history_limit);
        Ok(store)
    }
}
