//! Actions: typed descriptions of state changes, and their untyped wire form.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::Debug;

/// Untyped action as it arrives from a host: a `type` string plus an
/// optional JSON payload.
///
/// Raw actions are how unrecognized actions reach a store. A raw action whose
/// type is unknown, or whose payload does not fit, decodes to `None` and is
/// applied as a no-op.
///
/// # Example
///
/// ```rust
/// use tally::core::RawAction;
///
/// let raw: RawAction = serde_json::from_str(r#"{"type":"counter/incBy","payload":5}"#).unwrap();
/// assert_eq!(raw.kind, "counter/incBy");
/// assert_eq!(raw.payload, Some(serde_json::json!(5)));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawAction {
    /// Action type, e.g. `counter/inc`
    #[serde(rename = "type")]
    pub kind: String,
    /// Optional payload carried with the action
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl RawAction {
    /// Create a raw action with no payload.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            payload: None,
        }
    }

    /// Attach a payload.
    pub fn with_payload(mut self, payload: impl Into<Value>) -> Self {
        self.payload = Some(payload.into());
        self
    }
}

/// Trait for typed actions understood by a reducer.
///
/// # Example
///
/// ```rust
/// use tally::core::{Action, CounterAction, RawAction};
///
/// let action = CounterAction::IncrementBy(5);
/// assert_eq!(action.kind(), "counter/incBy");
///
/// let raw = action.to_raw();
/// assert_eq!(CounterAction::from_raw(&raw), Some(action));
///
/// assert_eq!(CounterAction::from_raw(&RawAction::new("counter/reset")), None);
/// ```
pub trait Action:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Wire type string of this action.
    fn kind(&self) -> &'static str;

    /// Decode a raw action, returning `None` when it is not recognized.
    fn from_raw(raw: &RawAction) -> Option<Self>;

    /// Encode into the raw wire form.
    fn to_raw(&self) -> RawAction;
}

/// Action type of [`CounterAction::Increment`].
pub const INCREMENT: &str = "counter/inc";
/// Action type of [`CounterAction::Decrement`].
pub const DECREMENT: &str = "counter/dec";
/// Action type of [`CounterAction::IncrementBy`].
pub const INCREMENT_BY: &str = "counter/incBy";

/// Mutations of the counter slice.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum CounterAction {
    /// Add one
    Increment,
    /// Subtract one
    Decrement,
    /// Add the payload
    IncrementBy(i64),
}

impl Action for CounterAction {
    fn kind(&self) -> &'static str {
        match self {
            Self::Increment => INCREMENT,
            Self::Decrement => DECREMENT,
            Self::IncrementBy(_) => INCREMENT_BY,
        }
    }

    fn from_raw(raw: &RawAction) -> Option<Self> {
        match raw.kind.as_str() {
            INCREMENT => Some(Self::Increment),
            DECREMENT => Some(Self::Decrement),
            // The payload must be an integer that fits in i64
            INCREMENT_BY => raw
                .payload
                .as_ref()
                .and_then(Value::as_i64)
                .map(Self::IncrementBy),
            _ => None,
        }
    }

    fn to_raw(&self) -> RawAction {
        match self {
            Self::IncrementBy(n) => RawAction::new(INCREMENT_BY).with_payload(*n),
            other => RawAction::new(other.kind()),
        }
    }
}

impl From<CounterAction> for RawAction {
    fn from(action: CounterAction) -> Self {
        action.to_raw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kinds_follow_slice_naming() {
        assert_eq!(CounterAction::Increment.kind(), "counter/inc");
        assert_eq!(CounterAction::Decrement.kind(), "counter/dec");
        assert_eq!(CounterAction::IncrementBy(5).kind(), "counter/incBy");
    }

    #[test]
    fn from_raw_recognizes_counter_actions() {
        assert_eq!(
            CounterAction::from_raw(&RawAction::new("counter/inc")),
            Some(CounterAction::Increment)
        );
        assert_eq!(
            CounterAction::from_raw(&RawAction::new("counter/dec")),
            Some(CounterAction::Decrement)
        );
        assert_eq!(
            CounterAction::from_raw(&RawAction::new("counter/incBy").with_payload(-3)),
            Some(CounterAction::IncrementBy(-3))
        );
    }

    #[test]
    fn unknown_type_is_unrecognized() {
        assert_eq!(CounterAction::from_raw(&RawAction::new("counter/reset")), None);
        assert_eq!(CounterAction::from_raw(&RawAction::new("todos/add")), None);
    }

    #[test]
    fn increment_by_without_integer_payload_is_unrecognized() {
        assert_eq!(CounterAction::from_raw(&RawAction::new("counter/incBy")), None);
        assert_eq!(
            CounterAction::from_raw(&RawAction::new("counter/incBy").with_payload("five")),
            None
        );
        assert_eq!(
            CounterAction::from_raw(&RawAction::new("counter/incBy").with_payload(2.5)),
            None
        );
    }

    #[test]
    fn raw_action_serializes_without_empty_payload() {
        let raw: RawAction = CounterAction::Increment.into();
        assert_eq!(serde_json::to_value(&raw).unwrap(), json!({"type": "counter/inc"}));

        let raw: RawAction = CounterAction::IncrementBy(5).into();
        assert_eq!(
            serde_json::to_value(&raw).unwrap(),
            json!({"type": "counter/incBy", "payload": 5})
        );
    }

    #[test]
    fn raw_action_deserializes_without_payload() {
        let raw: RawAction = serde_json::from_str(r#"{"type":"counter/dec"}"#).unwrap();
        assert_eq!(raw, RawAction::new("counter/dec"));
    }
}
