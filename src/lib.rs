//! Tally: a pure reducer-driven counter store
//!
//! Tally splits state management into a pure core and a thin imperative
//! shell. Reducers are pure functions from (state, action) to the next
//! state; the store owns the current value, records history, notifies
//! subscribers and serializes queued dispatches.
//!
//! # Core Concepts
//!
//! - **State**: Immutable values held by a store, via the `State` trait
//! - **Action**: Typed state changes with a raw wire form (`counter/inc`, ...)
//! - **Reducer**: Pure `(state, action) -> state` functions
//! - **Store**: Owned container applying dispatched actions
//! - **History**: Replayable record of applied actions
//!
//! # Example
//!
//! ```rust
//! use tally::{CounterAction, CounterStore, RawAction};
//!
//! let mut store = CounterStore::counter();
//! assert_eq!(store.value(), 1);
//!
//! store.dispatch(CounterAction::Increment);
//! store.dispatch(CounterAction::IncrementBy(5));
//! store.dispatch(CounterAction::Decrement);
//! assert_eq!(store.value(), 6);
//!
//! // Unrecognized actions are a no-op
//! store.dispatch_raw(&RawAction::new("counter/reset"));
//! assert_eq!(store.value(), 6);
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod scan;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, StoreBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{ConfigError, StoreConfig};
pub use crate::core::{
    Action, CounterAction, CounterReducer, CounterState, RawAction, Reducer, State, StateHistory,
};
pub use store::{CounterStore, DispatchError, Dispatched, Dispatcher, Store, SubscriptionId};
