//! Middleware system for the store
//!
//! Middleware sits between action dispatch and reducer execution, allowing
//! side effects, logging, and other cross-cutting concerns to be handled in a
//! composable way.
//!
//! ## Design
//!
//! ```text
//! Action → Middleware Chain → Reducer → State
//! ```
//!
//! Each middleware receives the action together with a [`Next`] handle for the
//! rest of the chain. It can:
//! - Inspect actions and state before and after the rest of the chain runs
//! - Dispatch new actions (they re-enter the chain from its head)
//! - Start background work without blocking the current dispatch
//! - Block actions from reaching the reducer by not calling `next`
//!
//! ## Example
//!
//! ```rust,ignore
//! struct AuditMiddleware;
//!
//! impl Middleware<AppState, AppAction> for AuditMiddleware {
//!     fn handle(
//!         &self,
//!         context: &MiddlewareContext<AppState, AppAction>,
//!         next: &Next<'_, AppState, AppAction>,
//!         action: AppAction,
//!     ) {
//!         let before = context.state();
//!         next.run(action);
//!         log::debug!("{:?} -> {:?}", before, context.state());
//!     }
//! }
//! ```

use crate::store::Store;

mod change_detection;
mod logging;

pub use change_detection::{Change, ChangeDetectionMiddleware};
pub use logging::LoggingMiddleware;

/// Middleware trait - intercepts actions before they reach the reducer
///
/// Middleware is shared by every clone of its store and may be invoked from
/// whichever thread is draining the dispatch queue, so state kept inside a
/// middleware needs interior mutability.
pub trait Middleware<S, A>: Send + Sync {
    /// Handle an action
    ///
    /// - `context`: read state, dispatch follow-up actions
    /// - `next`: the rest of the chain; call it (normally once) to let the
    ///   action continue, or skip it to consume the action
    /// - `action`: the action being dispatched
    fn handle(&self, context: &MiddlewareContext<S, A>, next: &Next<'_, S, A>, action: A);
}

/// Capabilities handed to middleware during a dispatch
pub struct MiddlewareContext<S, A> {
    store: Store<S, A>,
}

impl<S, A> MiddlewareContext<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    pub(crate) fn new(store: Store<S, A>) -> Self {
        Self { store }
    }

    /// Current state of the store (reflects the reducer once `next` returned)
    pub fn state(&self) -> S {
        self.store.current_state()
    }

    /// Dispatch an action into the same store
    ///
    /// The action is queued and re-enters the chain from its head after the
    /// current action has been reduced.
    pub fn dispatch(&self, action: A) {
        self.store.dispatch(action);
    }

    /// Owned store handle, for background tasks that dispatch later
    pub fn store(&self) -> Store<S, A> {
        self.store.clone()
    }
}

/// The remainder of the middleware chain
pub struct Next<'a, S, A> {
    chain: &'a [Box<dyn Middleware<S, A>>],
    context: &'a MiddlewareContext<S, A>,
}

impl<'a, S, A> Next<'a, S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    pub(crate) fn new(
        chain: &'a [Box<dyn Middleware<S, A>>],
        context: &'a MiddlewareContext<S, A>,
    ) -> Self {
        Self { chain, context }
    }

    /// Pass the action to the next middleware, or to the reducer at the end of the chain
    pub fn run(&self, action: A) {
        match self.chain.split_first() {
            Some((middleware, rest)) => {
                let next = Next::new(rest, self.context);
                middleware.handle(self.context, &next, action);
            }
            None => self.context.store.reduce(&action),
        }
    }
}
