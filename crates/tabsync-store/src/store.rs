use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::thread::{self, ThreadId};

use tokio::sync::watch;

use crate::middleware::{Middleware, MiddlewareContext, Next};

/// Reducer - pure function that produces new state from current state + action
pub type Reducer<S, A> = fn(S, &A) -> S;

/// Store - holds one state snapshot and manages the Redux loop
///
/// A `Store` is a cheap handle; clones share the same state, middleware chain
/// and dispatch queue.
///
/// # Dispatch
///
/// ```text
/// dispatch(action) → Middleware Chain → Reducer → publish to subscribers
/// ```
///
/// Dispatch is serialized per store and returns once the action has been
/// reduced. An action dispatched from middleware (via
/// [`MiddlewareContext::dispatch`], on the draining thread) is queued and runs
/// after the current action completes. A caller on another thread waits for
/// the running drain to finish, then drains its own action.
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

struct Inner<S, A> {
    reducer: Reducer<S, A>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    state_tx: watch::Sender<S>,
    queue: Mutex<DispatchQueue<A>>,
    /// Held by the thread draining the queue
    drain: Mutex<()>,
}

struct DispatchQueue<A> {
    pending: VecDeque<A>,
    drainer: Option<ThreadId>,
}

/// Marks the current thread as the drainer until dropped
struct DrainOwner<'a, A> {
    queue: &'a Mutex<DispatchQueue<A>>,
}

impl<A> Drop for DrainOwner<'_, A> {
    fn drop(&mut self) {
        self.queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drainer = None;
    }
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S, A> Store<S, A>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
{
    /// Create a store. Middleware runs in the order given.
    pub fn new(
        initial_state: S,
        reducer: Reducer<S, A>,
        middleware: Vec<Box<dyn Middleware<S, A>>>,
    ) -> Self {
        let (state_tx, _) = watch::channel(initial_state);
        Self {
            inner: Arc::new(Inner {
                reducer,
                middleware,
                state_tx,
                queue: Mutex::new(DispatchQueue {
                    pending: VecDeque::new(),
                    drainer: None,
                }),
                drain: Mutex::new(()),
            }),
        }
    }

    /// Get a snapshot of the current state
    pub fn current_state(&self) -> S {
        self.inner.state_tx.borrow().clone()
    }

    /// Subscribe to state changes
    ///
    /// The first value yielded is the state at subscribe time.
    pub fn subscribe(&self) -> Subscription<S> {
        let mut rx = self.inner.state_tx.subscribe();
        rx.mark_changed();
        Subscription { rx }
    }

    /// Process an action through the middleware chain and reducer
    pub fn dispatch(&self, action: A) {
        let this_thread = thread::current().id();
        {
            let mut queue = self.lock_queue();
            if queue.drainer == Some(this_thread) {
                queue.pending.push_back(action);
                return;
            }
        }

        let _drain = self
            .inner
            .drain
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let _owner = {
            let mut queue = self.lock_queue();
            queue.drainer = Some(this_thread);
            queue.pending.push_back(action);
            DrainOwner {
                queue: &self.inner.queue,
            }
        };

        while let Some(action) = self.next_pending() {
            self.process(action);
        }
    }

    fn next_pending(&self) -> Option<A> {
        self.lock_queue().pending.pop_front()
    }

    fn process(&self, action: A) {
        let context = MiddlewareContext::new(self.clone());
        Next::new(&self.inner.middleware, &context).run(action);
    }

    /// Apply the reducer and publish the result. Called at the tail of the chain.
    pub(crate) fn reduce(&self, action: &A) {
        let new_state = (self.inner.reducer)(self.current_state(), action);
        self.inner.state_tx.send_replace(new_state);
    }

    fn lock_queue(&self) -> MutexGuard<'_, DispatchQueue<A>> {
        self.inner
            .queue
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

/// Stream of state snapshots from a [`Store`]
///
/// Delivery is conflated: a subscriber that falls behind only sees the most
/// recent state. Dropping the subscription unsubscribes.
pub struct Subscription<S> {
    rx: watch::Receiver<S>,
}

impl<S: Clone> Subscription<S> {
    /// Wait for the next state. Returns `None` once the store is gone.
    pub async fn next(&mut self) -> Option<S> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}
