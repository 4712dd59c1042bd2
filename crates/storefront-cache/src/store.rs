use std::sync::mpsc::{self, Receiver};
use std::sync::Arc;

use crate::actions::{Action, RequestId};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::reducers::app_reducer::reduce;
use crate::state::RootState;

/// Store - holds the cache state and serializes dispatch
///
/// Actions pass through the middleware chain, then the root reducer. Actions
/// queued by middleware are processed afterwards, one at a time. The store
/// takes `&mut self` to dispatch, so at most one transition runs at a time.
pub struct Store {
    state: Arc<RootState>,
    middleware: Vec<Box<dyn Middleware>>,
    dispatcher: Dispatcher,
    pending: Receiver<Action>,
    last_request: u64,
}

impl Store {
    pub fn new(initial_state: RootState) -> Self {
        let (action_tx, pending) = mpsc::channel();
        Self {
            state: Arc::new(initial_state),
            middleware: Vec::new(),
            dispatcher: Dispatcher::new(action_tx),
            pending,
            last_request: 0,
        }
    }

    /// Add middleware to the store
    ///
    /// Middleware is called in the order it was added.
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware>) {
        self.middleware.push(middleware);
    }

    /// Get the current state
    pub fn state(&self) -> &Arc<RootState> {
        &self.state
    }

    /// Get the dispatcher
    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    /// Issue the id for a new request
    ///
    /// Tag both the request start and its completion with it; completions for
    /// older requests are then dropped by the collection reducers.
    pub fn next_request_id(&mut self) -> RequestId {
        self.last_request += 1;
        RequestId(self.last_request)
    }

    /// Process an action through middleware chain and reducer
    pub fn dispatch(&mut self, action: Action) {
        let mut should_reduce = true;

        for middleware in &mut self.middleware {
            if !middleware.handle(&action, &self.state, &self.dispatcher) {
                should_reduce = false;
                break;
            }
        }

        if should_reduce {
            self.state = reduce(&self.state, &action);
        }

        // Process any actions queued by middleware
        let queued: Vec<Action> = self.pending.try_iter().collect();
        for action in queued {
            self.dispatch(action);
        }
    }
}
