//! Bindings - subscription adapters scoped to an owner's lifetime
//!
//! A [`Binding`] turns a store's state stream into side effects (dispatching
//! into another store, calling a host API). [`ScopedBinding`] runs it:
//!
//! - states are filtered by [`Binding::key`] (distinct until changed)
//! - reactions are latest-wins: a new distinct state drops the reaction still
//!   running for the previous one, so a cancelled reaction never resumes past
//!   its pending await point
//! - `stop()` returns only once the reaction task is gone

use std::future::{self, Future};
use std::pin::Pin;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::store::{Store, Subscription};

/// BoxFuture type alias for binding reactions
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Reaction to a store's state, keyed for change filtering
///
/// # Example
///
/// ```rust,ignore
/// struct TitleBinding { window: Arc<dyn WindowHost> }
///
/// impl Binding<AppState> for TitleBinding {
///     type Key = String;
///
///     fn key(&self, state: &AppState) -> String {
///         state.title.clone()
///     }
///
///     fn on_state<'a>(&'a self, state: AppState) -> BoxFuture<'a, ()> {
///         Box::pin(async move { self.window.set_title(&state.title) })
///     }
/// }
/// ```
pub trait Binding<S>: Send + Sync + 'static {
    type Key: PartialEq + Send;

    /// Projection used to suppress states that did not change
    fn key(&self, state: &S) -> Self::Key;

    /// React to a state whose key differs from the last delivered one
    fn on_state<'a>(&'a self, state: S) -> BoxFuture<'a, ()>;
}

/// Suppresses a key equal to the last accepted key
#[derive(Debug)]
pub struct DistinctUntilChanged<K> {
    last: Option<K>,
}

impl<K> Default for DistinctUntilChanged<K> {
    fn default() -> Self {
        Self { last: None }
    }
}

impl<K: PartialEq> DistinctUntilChanged<K> {
    /// Returns `true` (and remembers the key) if it differs from the last accepted key
    pub fn accept(&mut self, key: K) -> bool {
        if self.last.as_ref() == Some(&key) {
            return false;
        }
        self.last = Some(key);
        true
    }
}

/// A [`Binding`] attached to a store for as long as its owner is active
pub struct ScopedBinding<S, A, B> {
    store: Store<S, A>,
    binding: Arc<B>,
    runtime: Handle,
    job: Option<JoinHandle<()>>,
}

impl<S, A, B> ScopedBinding<S, A, B>
where
    S: Clone + Send + Sync + 'static,
    A: Send + 'static,
    B: Binding<S>,
{
    pub fn new(store: Store<S, A>, binding: B, runtime: Handle) -> Self {
        Self {
            store,
            binding: Arc::new(binding),
            runtime,
            job: None,
        }
    }

    /// Subscribe and start reacting. No-op if already started.
    pub fn start(&mut self) {
        if self.is_active() {
            return;
        }
        let states = self.store.subscribe();
        let binding = Arc::clone(&self.binding);
        self.job = Some(self.runtime.spawn(collect_latest(binding, states)));
        log::info!("Binding started: {}", std::any::type_name::<B>());
    }

    /// Unsubscribe and cancel any in-flight reaction
    ///
    /// Idempotent. Once this returns no further reaction of this binding runs.
    pub async fn stop(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
            // Err(cancelled) is the expected outcome; a panic in a reaction is logged
            if let Err(e) = job.await {
                if e.is_panic() {
                    log::error!("Binding {} panicked: {}", std::any::type_name::<B>(), e);
                }
            }
            log::info!("Binding stopped: {}", std::any::type_name::<B>());
        }
    }

    pub fn is_active(&self) -> bool {
        self.job.as_ref().is_some_and(|job| !job.is_finished())
    }
}

impl<S, A, B> Drop for ScopedBinding<S, A, B> {
    fn drop(&mut self) {
        if let Some(job) = self.job.take() {
            job.abort();
        }
    }
}

async fn collect_latest<S, B>(binding: Arc<B>, mut states: Subscription<S>)
where
    S: Clone + Send + Sync + 'static,
    B: Binding<S>,
{
    let binding = binding.as_ref();
    let mut distinct = DistinctUntilChanged::default();
    let mut reaction: Option<BoxFuture<'_, ()>> = None;

    loop {
        tokio::select! {
            // newer state first, so a finished read never applies over a newer state
            biased;
            next = next_distinct(binding, &mut states, &mut distinct) => match next {
                // replacing the reaction drops (cancels) the previous one
                Some(state) => reaction = Some(binding.on_state(state)),
                None => break,
            },
            () = run_reaction(&mut reaction) => reaction = None,
        }
    }
}

async fn next_distinct<S, B>(
    binding: &B,
    states: &mut Subscription<S>,
    distinct: &mut DistinctUntilChanged<B::Key>,
) -> Option<S>
where
    S: Clone,
    B: Binding<S>,
{
    loop {
        let state = states.next().await?;
        if distinct.accept(binding.key(&state)) {
            return Some(state);
        }
    }
}

async fn run_reaction(reaction: &mut Option<BoxFuture<'_, ()>>) {
    match reaction {
        Some(reaction) => reaction.await,
        None => future::pending().await,
    }
}
