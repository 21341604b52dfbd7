//! Core State trait and the counter state.
//!
//! Store states are plain immutable values. The reducer never edits a state
//! in place; every dispatch produces a fresh value.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for values held by a store.
///
/// # Required Traits
///
/// - `Clone`: States are snapshotted into history and change notifications
/// - `PartialEq`: States are compared when validating replays
/// - `Debug`: States are debuggable for diagnostics and logging
/// - `Serialize` + `Deserialize`: States are serializable for checkpoints
///
/// # Example
///
/// ```rust
/// use tally::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Todos {
///     items: Vec<String>,
/// }
///
/// impl State for Todos {
///     fn name(&self) -> &str {
///         "todos"
///     }
/// }
///
/// let todos = Todos { items: vec![] };
/// assert_eq!(todos.name(), "todos");
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name of the slice this state belongs to, used for logging.
    fn name(&self) -> &str;
}

/// Slice name of the counter, also the prefix of its action types.
pub const COUNTER_SLICE: &str = "counter";

/// Value used when a counter store is created without an explicit initial value.
pub const DEFAULT_COUNTER_VALUE: i64 = 1;

/// State of the counter slice.
///
/// The value is always defined. `Default` yields the initial value `1`.
///
/// # Example
///
/// ```rust
/// use tally::core::CounterState;
///
/// let state = CounterState::default();
/// assert_eq!(state.value, 1);
///
/// let state = CounterState::new(-4);
/// assert_eq!(state.value, -4);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct CounterState {
    /// Current counter value
    pub value: i64,
}

impl CounterState {
    /// Create a counter state holding `value`.
    pub fn new(value: i64) -> Self {
        Self { value }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::new(DEFAULT_COUNTER_VALUE)
    }
}

impl State for CounterState {
    fn name(&self) -> &str {
        COUNTER_SLICE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_counter_starts_at_one() {
        assert_eq!(CounterState::default().value, 1);
    }

    #[test]
    fn counter_name_is_slice_name() {
        assert_eq!(CounterState::new(10).name(), "counter");
    }

    #[test]
    fn counter_serializes_as_value_object() {
        let state = CounterState::new(7);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"value":7}"#);

        let deserialized: CounterState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }

    #[test]
    fn counter_is_comparable() {
        assert_eq!(CounterState::new(3), CounterState::new(3));
        assert_ne!(CounterState::new(3), CounterState::new(4));
    }
}
