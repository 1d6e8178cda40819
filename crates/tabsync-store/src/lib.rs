//! Redux-style state container
//!
//! This crate provides:
//! - `Store`: one state snapshot, an ordered middleware chain and a reducer
//! - `Middleware`: interceptors that observe, veto or follow up on actions
//! - `ChangeDetectionMiddleware`: reports actions that changed a projection of state
//! - `ScopedBinding`: lifetime-scoped subscribers with change filtering and
//!   latest-wins reactions

pub mod binding;
pub mod middleware;
pub mod store;

pub use binding::{Binding, BoxFuture, DistinctUntilChanged, ScopedBinding};
pub use middleware::{
    Change, ChangeDetectionMiddleware, LoggingMiddleware, Middleware, MiddlewareContext, Next,
};
pub use store::{Reducer, Store, Subscription};
