use std::fmt::Debug;

use crate::middleware::{Middleware, MiddlewareContext, Next};

/// LoggingMiddleware - logs all actions passing through
pub struct LoggingMiddleware {
    store_name: &'static str,
}

impl LoggingMiddleware {
    pub fn new(store_name: &'static str) -> Self {
        Self { store_name }
    }
}

impl<S, A> Middleware<S, A> for LoggingMiddleware
where
    S: Clone + Send + Sync + 'static,
    A: Debug + Send + 'static,
{
    fn handle(&self, _context: &MiddlewareContext<S, A>, next: &Next<'_, S, A>, action: A) {
        log::debug!("{}: Action: {:?}", self.store_name, action);
        next.run(action);
    }
}
