//! Dispatch history tracking.
//!
//! Every applied action is recorded together with the state it started from
//! and the state it produced, so a store's evolution can be inspected and
//! replayed.

use super::action::Action;
use super::reducer::Reducer;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single applied action.
///
/// # Example
///
/// ```rust
/// use tally::core::{CounterAction, CounterState, DispatchRecord};
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     sequence: 1,
///     from: CounterState::new(1),
///     to: CounterState::new(2),
///     action: CounterAction::Increment,
///     timestamp: Utc::now(),
/// };
/// assert_eq!(record.to.value, 2);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct DispatchRecord<S: State, A: Action> {
    /// Position of the dispatch in the store's lifetime, starting at 1
    pub sequence: u64,
    /// State before the action was applied
    pub from: S,
    /// State after the action was applied
    pub to: S,
    /// The applied action
    pub action: A,
    /// When the action was applied
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of applied actions.
///
/// `record` consumes the history and returns the extended one; a history
/// value that has been handed out is never changed behind its owner's back.
///
/// # Example
///
/// ```rust
/// use tally::core::{CounterAction, CounterReducer, CounterState, DispatchRecord, StateHistory};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(DispatchRecord {
///         sequence: 1,
///         from: CounterState::new(1),
///         to: CounterState::new(2),
///         action: CounterAction::Increment,
///         timestamp: Utc::now(),
///     })
///     .record(DispatchRecord {
///         sequence: 2,
///         from: CounterState::new(2),
///         to: CounterState::new(7),
///         action: CounterAction::IncrementBy(5),
///         timestamp: Utc::now(),
///     });
///
/// let path: Vec<i64> = history.get_path().iter().map(|s| s.value).collect();
/// assert_eq!(path, vec![1, 2, 7]);
/// assert_eq!(history.replay(&CounterReducer), Some(CounterState::new(7)));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State, A: Action> {
    records: VecDeque<DispatchRecord<S, A>>,
}

impl<S: State, A: Action> Default for StateHistory<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State, A: Action> StateHistory<S, A> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: VecDeque::new(),
        }
    }

    /// Append a record, returning the extended history.
    pub fn record(mut self, record: DispatchRecord<S, A>) -> Self {
        self.records.push_back(record);
        self
    }

    /// Keep only the most recent `limit` records.
    pub fn retain_last(mut self, limit: usize) -> Self {
        while self.records.len() > limit {
            self.records.pop_front();
        }
        self
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest record, then the `to` state of
    /// each record in order. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.records.len() + 1);
        if let Some(first) = self.records.front() {
            path.push(&first.from);
        }
        path.extend(self.records.iter().map(|r| &r.to));
        path
    }

    /// Time between the oldest and the newest record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.records.front()?, self.records.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Get all records, oldest first.
    pub fn records(&self) -> &VecDeque<DispatchRecord<S, A>> {
        &self.records
    }

    /// Iterate over the recorded actions, oldest first.
    pub fn actions(&self) -> impl Iterator<Item = &A> {
        self.records.iter().map(|r| &r.action)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Re-run the recorded actions through `reducer`, starting from the
    /// oldest recorded state.
    ///
    /// Returns the resulting state, or `None` for an empty history. For a
    /// pure reducer this equals the newest record's `to` state.
    pub fn replay<R>(&self, reducer: &R) -> Option<S>
    where
        R: Reducer<State = S, Action = A>,
    {
        let first = self.records.front()?;
        let state = self
            .actions()
            .fold(first.from.clone(), |state, action| reducer.reduce(&state, action));
        Some(state)
    }
}
