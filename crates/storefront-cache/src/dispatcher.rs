//! Dispatcher for middleware action dispatch
//!
//! Middleware that needs to follow up with another action (for example a
//! request start that should be logged and reduced like any other) queues it
//! on the Dispatcher. The store drains the queue after the current action has
//! been reduced, so follow-ups re-enter the middleware chain from the start.

use crate::actions::Action;
use std::sync::mpsc::Sender;

/// Handle for queueing follow-up actions
#[derive(Clone)]
pub struct Dispatcher {
    action_tx: Sender<Action>,
}

impl Dispatcher {
    /// Create a dispatcher feeding the store's pending queue
    pub fn new(action_tx: Sender<Action>) -> Self {
        Self { action_tx }
    }

    /// Queue an action behind the one currently being processed
    pub fn dispatch(&self, action: Action) {
        if let Err(e) = self.action_tx.send(action) {
            log::error!("Dispatcher: failed to queue action: {}", e);
        }
    }
}
