//! Core store types and logic.
//!
//! This module contains the pure functional core of the store:
//! - States via the `State` trait, and the counter state
//! - Typed actions and their raw wire form
//! - Reducers mapping (state, action) to the next state
//! - History of applied actions
//!
//! Nothing in this module performs I/O or keeps shared mutable state.

mod action;
mod history;
mod reducer;
mod state;

pub use action::{Action, CounterAction, RawAction, DECREMENT, INCREMENT, INCREMENT_BY};
pub use history::{DispatchRecord, StateHistory};
pub use reducer::{counter_reducer, CounterReducer, Reducer};
pub use state::{CounterState, State, COUNTER_SLICE, DEFAULT_COUNTER_VALUE};
