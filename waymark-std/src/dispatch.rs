//! # Dispatcher
//!
//! Composes the [`RouteRegistry`] and the [locator](crate::locate):
//!
//! 1. **Resolve**: look up the target's path and run the handler with a fresh
//!    [`RouteContext`].
//! 2. **Locate**: find the navigation stack (push) or the topmost visible node
//!    (present) in the host's current tree.
//! 3. **Delegate**: hand the screen to the [`PresentationHost`].
//!
//! Every step can come up empty, and any empty step ends the attempt with
//! `None` / `false` before the host is touched. Nothing here returns an error.

use crate::locate;
use crate::registry::RouteRegistry;
use futures::channel::oneshot;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use waymark_core::{Completion, PresentationHost, RoutableTarget, RouteContext};

pub use futures::channel::oneshot::Canceled;

/// Resolves targets against a registry and hands the screens to a host.
pub struct Dispatcher<S> {
    registry: RouteRegistry<S>,
}

impl<S> Dispatcher<S> {
    /// Create a dispatcher over `registry`.
    pub fn new(registry: RouteRegistry<S>) -> Self {
        Self { registry }
    }

    /// The underlying registry.
    pub fn registry(&self) -> &RouteRegistry<S> {
        &self.registry
    }

    /// Mutable access to the registry, for late registration.
    pub fn registry_mut(&mut self) -> &mut RouteRegistry<S> {
        &mut self.registry
    }

    /// Consume the dispatcher, returning its registry.
    pub fn into_registry(self) -> RouteRegistry<S> {
        self.registry
    }

    /// Turn `target` into a screen.
    ///
    /// Returns `None` when no handler is registered for the target's path, or
    /// when the handler declines. Missing parameters reach the handler as an
    /// empty mapping.
    pub fn resolve<T>(&self, target: &T) -> Option<S>
    where
        T: RoutableTarget + ?Sized,
    {
        let path = target.path();
        let Some(invoker) = self.registry.lookup(path.value()) else {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(path = %path, "no route registered");
            }
            return None;
        };

        let parameters = target.parameters().unwrap_or_default();
        let screen = invoker.invoke(RouteContext::new(path.value(), parameters));
        #[cfg(feature = "tracing")]
        {
            if screen.is_none() {
                tracing::debug!(path = %path, "handler declined");
            }
        }
        screen
    }

    /// Resolve `target` and push it onto the host's active navigation stack.
    ///
    /// Returns `false`, leaving the host untouched, when the target does not
    /// resolve or when no navigation stack is reachable from the host's root.
    pub fn push<H, T>(&self, host: &mut H, target: &T, animated: bool) -> bool
    where
        H: PresentationHost<Screen = S> + ?Sized,
        T: RoutableTarget + ?Sized,
    {
        let Some(screen) = self.resolve(target) else {
            return false;
        };
        let Some(navigation) = host.root().and_then(locate::active_navigation) else {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(path = %target.path(), "push refused: no navigation stack");
            }
            return false;
        };

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                path = %target.path(),
                container = %navigation.id(),
                name = navigation.name(),
                animated,
                "pushing screen"
            );
        }
        let navigation = navigation.id();
        host.push(navigation, screen, animated);
        true
    }

    /// Resolve `target` and present it over the host's topmost visible node.
    ///
    /// Returns `false`, leaving the host untouched, when the target does not
    /// resolve or when the host has no root. `on_complete` is handed to the
    /// host, which runs it once the presentation finishes.
    pub fn present<H, T>(
        &self,
        host: &mut H,
        target: &T,
        animated: bool,
        on_complete: Option<Completion>,
    ) -> bool
    where
        H: PresentationHost<Screen = S> + ?Sized,
        T: RoutableTarget + ?Sized,
    {
        let Some(screen) = self.resolve(target) else {
            return false;
        };
        let Some(top) = host.root().map(locate::topmost_visible) else {
            #[cfg(feature = "tracing")]
            {
                tracing::debug!(path = %target.path(), "present refused: host has no root");
            }
            return false;
        };

        #[cfg(feature = "tracing")]
        {
            tracing::debug!(
                path = %target.path(),
                container = %top.id(),
                name = top.name(),
                animated,
                "presenting screen"
            );
        }
        let top = top.id();
        host.present(top, screen, animated, on_complete);
        true
    }

    /// Like [`present`](Self::present), returning a future that completes when
    /// the host reports the presentation finished.
    ///
    /// The future yields [`Canceled`] if the host drops the completion without
    /// running it.
    pub fn present_awaitable<H, T>(
        &self,
        host: &mut H,
        target: &T,
        animated: bool,
    ) -> Option<Presented>
    where
        H: PresentationHost<Screen = S> + ?Sized,
        T: RoutableTarget + ?Sized,
    {
        let (tx, rx) = oneshot::channel();
        let on_complete: Completion = Box::new(move || {
            let _ = tx.send(());
        });
        self.present(host, target, animated, Some(on_complete))
            .then_some(Presented { rx })
    }
}

impl<S> From<RouteRegistry<S>> for Dispatcher<S> {
    fn from(registry: RouteRegistry<S>) -> Self {
        Self::new(registry)
    }
}

impl<S> Default for Dispatcher<S> {
    fn default() -> Self {
        Self::new(RouteRegistry::new())
    }
}

/// Completion of a presentation started by [`Dispatcher::present_awaitable`].
#[derive(Debug)]
#[must_use = "futures do nothing unless polled"]
pub struct Presented {
    rx: oneshot::Receiver<()>,
}

impl Future for Presented {
    type Output = Result<(), Canceled>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.rx).poll(cx)
    }
}
