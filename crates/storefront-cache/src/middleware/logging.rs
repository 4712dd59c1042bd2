use crate::actions::{Action, Fetch, Payload};
use crate::dispatcher::Dispatcher;
use crate::middleware::Middleware;
use crate::state::RootState;

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware;

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl Middleware for LoggingMiddleware {
    fn handle(&mut self, action: &Action, _state: &RootState, _dispatcher: &Dispatcher) -> bool {
        // Records can be large, only log what happened
        log::debug!("Action: {} ({})", action.action_type(), describe(action));
        true // Always pass action through
    }
}

fn describe(action: &Action) -> String {
    match action {
        Action::Product(fetch) => phase(fetch),
        Action::Category(fetch) => phase(fetch),
        Action::Attribute(fetch) => phase(fetch),
        Action::Post(fetch) => phase(fetch),
        Action::Page(fetch) => phase(fetch),
        Action::Account(fetch) => phase(fetch),
        Action::Order(fetch) => phase(fetch),
        Action::Sale(fetch) => phase(fetch),
        Action::Country(fetch) => phase(fetch),
        Action::ProductVariations(loaded) => {
            format!("{} variations for {}", loaded.variations.len(), loaded.product)
        }
        Action::AttributeTerms(loaded) => {
            format!("{} terms for {}", loaded.terms.len(), loaded.attribute)
        }
        Action::Unknown(_) => "unhandled".to_string(),
    }
}

fn phase<T>(fetch: &Fetch<T>) -> String {
    if fetch.is_fetching {
        return match &fetch.payload {
            Payload::Key(key) => format!("request {}", key),
            _ => "request".to_string(),
        };
    }
    match &fetch.payload {
        Payload::Items(items) => format!("{} items", items.len()),
        Payload::Entity(_) => "1 entity".to_string(),
        Payload::None | Payload::Key(_) => "completed without records".to_string(),
    }
}
