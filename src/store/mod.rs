//! The store: owns the current state and applies dispatched actions.
//!
//! A store wraps a pure [`Reducer`] with the imperative shell around it:
//! - the current state, replaced on every dispatch
//! - an optional, optionally bounded, dispatch history
//! - a subscriber list notified after every applied action
//! - a single-consumer queue fed by cloneable [`Dispatcher`] handles
//!
//! Stores are plain owned values. Construct one per test or per host; there
//! is no global instance.

mod dispatcher;
mod subscription;

pub use dispatcher::{DispatchError, Dispatcher};
pub use subscription::{Change, Listener, SubscriptionId};

use crate::builder::StoreBuilder;
use crate::checkpoint::{Checkpoint, CheckpointError, StoreMetadata};
use crate::config::{ConfigError, StoreConfig};
use crate::core::{
    Action, CounterReducer, CounterState, DispatchRecord, RawAction, Reducer, State, StateHistory,
};
use chrono::Utc;
use dispatcher::Envelope;
use std::sync::mpsc::{self, Receiver, Sender};
use tracing::{debug, info, trace};

/// Outcome of dispatching a raw action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatched {
    /// The action was recognized and applied
    Applied,
    /// The action was not recognized; state is unchanged
    Ignored,
}

/// Store running the counter reducer.
pub type CounterStore = Store<CounterReducer>;

/// Owned state container driven by a reducer.
pub struct Store<R: Reducer> {
    reducer: R,
    initial: R::State,
    current: R::State,
    history: StateHistory<R::State, R::Action>,
    record_history: bool,
    history_limit: Option<usize>,
    subscribers: Vec<(SubscriptionId, Listener<R::State, R::Action>)>,
    metadata: StoreMetadata,
    inbox: Receiver<Envelope<R::Action>>,
    outbox: Sender<Envelope<R::Action>>,
}

impl<R: Reducer> Store<R> {
    /// Create a store with full, unbounded history.
    pub fn new(reducer: R, initial: R::State) -> Self {
        Self::from_parts(
            reducer,
            initial.clone(),
            initial,
            StateHistory::new(),
            StoreMetadata::default(),
        )
    }

    pub(crate) fn from_parts(
        reducer: R,
        initial: R::State,
        current: R::State,
        history: StateHistory<R::State, R::Action>,
        metadata: StoreMetadata,
    ) -> Self {
        let (outbox, inbox) = mpsc::channel();
        Self {
            reducer,
            initial,
            current,
            history,
            record_history: true,
            history_limit: None,
            subscribers: Vec::new(),
            metadata,
            inbox,
            outbox,
        }
    }

    pub(crate) fn configure_history(&mut self, record_history: bool, limit: Option<usize>) {
        self.record_history = record_history;
        self.history_limit = limit;
        if !record_history {
            self.history = StateHistory::new();
        } else if let Some(limit) = limit {
            self.history = std::mem::take(&mut self.history).retain_last(limit);
        }
    }

    /// Rebuild a store from a checkpoint, with default history settings.
    ///
    /// The checkpoint is validated against `reducer` first.
    pub fn resume(
        reducer: R,
        checkpoint: Checkpoint<R::State, R::Action>,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate(&reducer)?;
        info!(
            checkpoint = %checkpoint.id,
            slice = checkpoint.current_state.name(),
            dispatch_count = checkpoint.metadata.dispatch_count,
            "resuming store from checkpoint"
        );
        Ok(Self::from_parts(
            reducer,
            checkpoint.initial_state,
            checkpoint.current_state,
            checkpoint.history,
            checkpoint.metadata,
        ))
    }

    /// Start a builder for a store running `reducer`.
    pub fn builder(reducer: R) -> StoreBuilder<R> {
        StoreBuilder::new(reducer)
    }

    /// Current state.
    pub fn state(&self) -> &R::State {
        &self.current
    }

    /// State the store was created with.
    pub fn initial_state(&self) -> &R::State {
        &self.initial
    }

    /// Read a value out of the current state.
    pub fn select<T>(&self, selector: impl FnOnce(&R::State) -> T) -> T {
        selector(&self.current)
    }

    pub fn reducer(&self) -> &R {
        &self.reducer
    }

    pub fn history(&self) -> &StateHistory<R::State, R::Action> {
        &self.history
    }

    pub fn metadata(&self) -> &StoreMetadata {
        &self.metadata
    }

    /// Apply an action. When this returns the state reflects the reducer's
    /// output and every subscriber has been notified.
    ///
    /// State, metadata and history are updated before listeners run, so a
    /// panicking listener cannot leave them out of step.
    pub fn dispatch(&mut self, action: R::Action) {
        let next = self.reducer.reduce(&self.current, &action);
        let previous = std::mem::replace(&mut self.current, next);

        let timestamp = Utc::now();
        self.metadata.dispatch_count += 1;
        self.metadata.updated_at = timestamp;
        let sequence = self.metadata.dispatch_count;

        debug!(
            sequence,
            action = action.kind(),
            from = ?previous,
            to = ?self.current,
            "applied action"
        );

        // The store is consistent before any listener runs
        if self.record_history {
            let record = DispatchRecord {
                sequence,
                from: previous.clone(),
                to: self.current.clone(),
                action: action.clone(),
                timestamp,
            };
            let mut history = std::mem::take(&mut self.history).record(record);
            if let Some(limit) = self.history_limit {
                history = history.retain_last(limit);
            }
            self.history = history;
        }

        let change = Change {
            sequence,
            previous: &previous,
            current: &self.current,
            action: &action,
        };
        for (_, listener) in self.subscribers.iter_mut() {
            listener(&change);
        }
    }

    /// Apply an untyped action.
    ///
    /// Unrecognized actions leave the state unchanged, notify nobody, and are
    /// not recorded in history.
    pub fn dispatch_raw(&mut self, raw: &RawAction) -> Dispatched {
        match <R::Action as Action>::from_raw(raw) {
            Some(action) => {
                self.dispatch(action);
                Dispatched::Applied
            }
            None => {
                self.metadata.ignored_count += 1;
                debug!(kind = %raw.kind, "ignoring unrecognized action");
                Dispatched::Ignored
            }
        }
    }

    /// Register a listener called after every applied action.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: for<'a> FnMut(&Change<'a, R::State, R::Action>) + Send + 'static,
    {
        let id = SubscriptionId::new();
        self.subscribers.push((id, Box::new(listener)));
        trace!(subscription = %id, "subscribed");
        id
    }

    /// Remove a listener. Returns `false` if the id is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        let removed = self.subscribers.len() != before;
        trace!(subscription = %id, removed, "unsubscribed");
        removed
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    /// Handle for queueing actions from other threads or tasks.
    pub fn dispatcher(&self) -> Dispatcher<R::Action> {
        Dispatcher::new(self.outbox.clone())
    }

    /// Apply every queued action in arrival order.
    ///
    /// Returns how many queue entries were processed, ignored raw actions
    /// included.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(envelope) = self.inbox.try_recv() {
            match envelope {
                Envelope::Typed(action) => self.dispatch(action),
                Envelope::Raw(raw) => {
                    self.dispatch_raw(&raw);
                }
            }
            processed += 1;
        }
        trace!(processed, "drained action queue");
        processed
    }

    /// Snapshot the store.
    pub fn checkpoint(&self) -> Checkpoint<R::State, R::Action> {
        Checkpoint::new(
            self.initial.clone(),
            self.current.clone(),
            self.history.clone(),
            self.metadata.clone(),
        )
    }
}

impl Store<CounterReducer> {
    /// Counter store starting at the default value.
    pub fn counter() -> Self {
        Self::new(CounterReducer, CounterState::default())
    }

    /// Counter store built from validated configuration.
    pub fn from_config(config: &StoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let store = StoreBuilder::new(CounterReducer)
            .initial(CounterState::new(config.initial_value))
            .record_history(config.record_history)
            .maybe_history_limit(config.history_limit)
            .build()?;
        Ok(store)
    }

    /// Current counter value.
    pub fn value(&self) -> i64 {
        self.current.value
    }
}

impl Default for Store<CounterReducer> {
    fn default() -> Self {
        Self::counter()
    }
}
