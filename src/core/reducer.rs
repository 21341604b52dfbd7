//! Pure reducers mapping (state, action) to the next state.

use super::action::{Action, CounterAction, RawAction};
use super::state::{CounterState, State};

/// Pure function from the current state and an action to the next state.
///
/// Implementations must be deterministic and must not have side effects:
/// the same `(state, action)` pair always yields the same result, and the
/// input state is left untouched.
///
/// # Example
///
/// ```rust
/// use tally::core::{CounterAction, CounterReducer, CounterState, RawAction, Reducer};
///
/// let reducer = CounterReducer;
/// let state = CounterState::default();
///
/// let next = reducer.reduce(&state, &CounterAction::IncrementBy(5));
/// assert_eq!(next.value, 6);
/// assert_eq!(state.value, 1); // input unchanged
///
/// // Unrecognized raw actions leave the state as it was
/// let same = reducer.reduce_raw(&state, &RawAction::new("counter/reset"));
/// assert_eq!(same, state);
/// ```
pub trait Reducer {
    /// State the reducer operates on.
    type State: State;

    /// Actions the reducer understands.
    type Action: Action;

    /// Compute the next state.
    fn reduce(&self, state: &Self::State, action: &Self::Action) -> Self::State;

    /// Compute the next state from an untyped action.
    ///
    /// Unrecognized actions return a copy of `state`.
    fn reduce_raw(&self, state: &Self::State, raw: &RawAction) -> Self::State {
        match Self::Action::from_raw(raw) {
            Some(action) => self.reduce(state, &action),
            None => state.clone(),
        }
    }
}

/// Reducer of the counter slice.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CounterReducer;

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;

    fn reduce(&self, state: &CounterState, action: &CounterAction) -> CounterState {
        counter_reducer(state, action)
    }
}

/// The counter reducer as a free function.
///
/// Arithmetic wraps at the `i64` bounds so every representable value has a
/// successor and a predecessor.
///
/// ```rust
/// use tally::core::{counter_reducer, CounterAction, CounterState};
///
/// let state = counter_reducer(&CounterState::new(i64::MAX), &CounterAction::Increment);
/// assert_eq!(state.value, i64::MIN);
/// ```
pub fn counter_reducer(state: &CounterState, action: &CounterAction) -> CounterState {
    let value = match action {
        CounterAction::Increment => state.value.wrapping_add(1),
        CounterAction::Decrement => state.value.wrapping_sub(1),
        CounterAction::IncrementBy(n) => state.value.wrapping_add(*n),
    };
    CounterState::new(value)
}
