//! Stored handlers.

use crate::context::RouteContext;
use std::fmt;

type BoxHandler<S> = Box<dyn Fn(RouteContext) -> Option<S> + Send + Sync>;

/// The stored wrapper around a registered handler.
///
/// An invoker owns exactly one handler function producing a screen from a
/// [`RouteContext`]. The handler may decline by returning `None`.
pub struct Invoker<S> {
    handler: BoxHandler<S>,
}

impl<S> Invoker<S> {
    /// Wrap a handler function.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(RouteContext) -> Option<S> + Send + Sync + 'static,
    {
        Self {
            handler: Box::new(handler),
        }
    }

    /// Run the handler.
    pub fn invoke(&self, context: RouteContext) -> Option<S> {
        (self.handler)(context)
    }
}

impl<S> fmt::Debug for Invoker<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Invoker").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::Invoker;
    use crate::context::RouteContext;
    use crate::params::Params;

    #[test]
    fn test_invoke_passes_context() {
        let invoker = Invoker::new(|ctx: RouteContext| Some(ctx.path().to_uppercase()));
        let out = invoker.invoke(RouteContext::new("home", Params::new()));
        assert_eq!(out.as_deref(), Some("HOME"));
    }

    #[test]
    fn test_handler_may_decline() {
        let invoker: Invoker<String> = Invoker::new(|_| None);
        assert!(invoker.invoke(RouteContext::default()).is_none());
    }
}
