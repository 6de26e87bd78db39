//! Navigation methods on targets.

use crate::dispatch::Dispatcher;
use waymark_core::{Completion, PresentationHost, RoutableTarget};

/// Convenience methods for any [`RoutableTarget`], delegating to a [`Dispatcher`].
///
/// ```rust,ignore
/// Profile { id: 7 }.push(&dispatcher, &mut host, true);
/// ```
pub trait RoutableTargetExt: RoutableTarget {
    /// Resolve this target to a screen.
    fn screen<S>(&self, dispatcher: &Dispatcher<S>) -> Option<S> {
        dispatcher.resolve(self)
    }

    /// Push this target onto the host's active navigation stack.
    fn push<H>(&self, dispatcher: &Dispatcher<H::Screen>, host: &mut H, animated: bool) -> bool
    where
        H: PresentationHost + ?Sized,
    {
        dispatcher.push(host, self, animated)
    }

    /// Present this target over the host's topmost visible node.
    fn present<H>(
        &self,
        dispatcher: &Dispatcher<H::Screen>,
        host: &mut H,
        animated: bool,
        on_complete: Option<Completion>,
    ) -> bool
    where
        H: PresentationHost + ?Sized,
    {
        dispatcher.present(host, self, animated, on_complete)
    }
}

impl<T: RoutableTarget + ?Sized> RoutableTargetExt for T {}
