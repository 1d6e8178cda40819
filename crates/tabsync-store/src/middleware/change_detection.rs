//! Change Detection Middleware
//!
//! Projects the state before and after an action is reduced and reports the
//! action only when the projection changed.

use crate::middleware::{Middleware, MiddlewareContext, Next};

/// A detected change of the selected projection
pub struct Change<'a, S, A, K> {
    /// The action that caused the change
    pub action: &'a A,
    pub pre_state: &'a S,
    pub pre_selection: &'a K,
    pub post_state: &'a S,
    pub post_selection: &'a K,
}

type Selector<S, K> = Box<dyn Fn(&S) -> K + Send + Sync>;
type OnChange<S, A, K> = Box<dyn Fn(&MiddlewareContext<S, A>, Change<'_, S, A, K>) + Send + Sync>;

/// Generic middleware invoking `on_change` exactly once per dispatch in which
/// `selector(state)` changed by value, and never when it stayed the same.
pub struct ChangeDetectionMiddleware<S, A, K> {
    selector: Selector<S, K>,
    on_change: OnChange<S, A, K>,
}

impl<S, A, K> ChangeDetectionMiddleware<S, A, K> {
    pub fn new<F, G>(selector: F, on_change: G) -> Self
    where
        F: Fn(&S) -> K + Send + Sync + 'static,
        G: Fn(&MiddlewareContext<S, A>, Change<'_, S, A, K>) + Send + Sync + 'static,
    {
        Self {
            selector: Box::new(selector),
            on_change: Box::new(on_change),
        }
    }
}

impl<S, A, K> Middleware<S, A> for ChangeDetectionMiddleware<S, A, K>
where
    S: Clone + Send + Sync + 'static,
    A: Clone + Send + 'static,
    K: PartialEq + 'static,
{
    fn handle(&self, context: &MiddlewareContext<S, A>, next: &Next<'_, S, A>, action: A) {
        let pre_state = context.state();
        let pre_selection = (self.selector)(&pre_state);

        next.run(action.clone());

        let post_state = context.state();
        let post_selection = (self.selector)(&post_state);

        if pre_selection != post_selection {
            (self.on_change)(
                context,
                Change {
                    action: &action,
                    pre_state: &pre_state,
                    pre_selection: &pre_selection,
                    post_state: &post_state,
                    post_selection: &post_selection,
                },
            );
        }
    }
}
