//! Cloneable handle feeding a store's single-consumer action queue.

use crate::core::{Action, RawAction};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Errors that can occur when queueing an action
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Store has been dropped; the action was not queued")]
    StoreClosed,
}

/// Queue entry: a typed action or an undecoded raw action.
#[derive(Debug)]
pub(crate) enum Envelope<A> {
    Typed(A),
    Raw(RawAction),
}

/// Sender half of a store's action queue.
///
/// Dispatchers can be cloned and moved to other threads or tasks. Queued
/// actions are applied, in arrival order, when the store owner calls
/// [`Store::process_pending`](crate::store::Store::process_pending).
#[derive(Debug)]
pub struct Dispatcher<A> {
    sender: Sender<Envelope<A>>,
}

impl<A> Clone for Dispatcher<A> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<A: Action> Dispatcher<A> {
    pub(crate) fn new(sender: Sender<Envelope<A>>) -> Self {
        Self { sender }
    }

    /// Queue a typed action.
    pub fn dispatch(&self, action: A) -> Result<(), DispatchError> {
        self.sender
            .send(Envelope::Typed(action))
            .map_err(|_| DispatchError::StoreClosed)
    }

    /// Queue a raw action. Unrecognized actions are ignored when processed.
    pub fn dispatch_raw(&self, raw: RawAction) -> Result<(), DispatchError> {
        self.sender
            .send(Envelope::Raw(raw))
            .map_err(|_| DispatchError::StoreClosed)
    }
}
