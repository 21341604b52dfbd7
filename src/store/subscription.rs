//! Change notifications for store subscribers.

use std::fmt;
use uuid::Uuid;

/// Notification handed to subscribers after an action was applied.
#[derive(Debug)]
pub struct Change<'a, S, A> {
    /// Sequence number of the dispatch that caused this change
    pub sequence: u64,
    /// State before the action
    pub previous: &'a S,
    /// State after the action
    pub current: &'a S,
    /// The applied action
    pub action: &'a A,
}

impl<S: PartialEq, A> Change<'_, S, A> {
    /// Whether the action produced a different state.
    pub fn is_changed(&self) -> bool {
        self.previous != self.current
    }
}

/// Boxed subscriber callback.
pub type Listener<S, A> = Box<dyn for<'a> FnMut(&Change<'a, S, A>) + Send>;

/// Handle identifying a subscription, used to unsubscribe.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
