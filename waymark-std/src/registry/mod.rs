//! # Route Registry
//!
//! A `HashMap`-backed table from path string to [`Invoker`].
//!
//! Registration on [`RouteRegistry`] is last-write-wins: registering a second
//! handler under a path silently replaces the first. Callers that want collisions
//! surfaced use [`RouteRegistry::try_register`] or a [`RegistryBuilder`] in
//! [`strict`](RegistryBuilder::strict) mode.
//!
//! The registry is not internally synchronized. Register during startup through
//! `&mut`, then share it read-only.

#[cfg(feature = "inventory")]
pub mod global;

use std::collections::HashMap;
use waymark_core::{Invoker, RegistryError, RouteContext, RoutePath, WaymarkError};

/// Wrap a handler that reports why it declined.
///
/// An `Err` becomes absence, like a handler returning `None`; with the
/// `tracing` feature the error is logged first.
fn fallible<S, F>(handler: F) -> Invoker<S>
where
    F: Fn(RouteContext) -> Result<S, WaymarkError> + Send + Sync + 'static,
{
    Invoker::new(move |context: RouteContext| {
        #[cfg(feature = "tracing")]
        let path = context.path().to_owned();
        let result = handler(context);
        #[cfg(feature = "tracing")]
        {
            if let Err(err) = &result {
                tracing::debug!(path = %path, error = %err, "route handler failed");
            }
        }
        result.ok()
    })
}

/// The table of registered routes.
pub struct RouteRegistry<S> {
    routes: HashMap<String, Invoker<S>>,
}

impl<S> RouteRegistry<S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    /// Insert or overwrite the invoker for `path`.
    ///
    /// No validation is performed; the empty string is a valid key.
    pub fn register(&mut self, path: impl Into<String>, invoker: Invoker<S>) {
        let path = path.into();
        #[cfg(feature = "tracing")]
        {
            let replaces = self.routes.contains_key(&path);
            tracing::debug!(path = %path, replaces, "registering route");
        }
        self.routes.insert(path, invoker);
    }

    /// Register a handler function under a [`RoutePath`].
    pub fn register_fn<F>(&mut self, path: impl Into<RoutePath>, handler: F)
    where
        F: Fn(RouteContext) -> Option<S> + Send + Sync + 'static,
    {
        self.register(path.into().into_inner(), Invoker::new(handler));
    }

    /// Register a handler that may fail with a [`WaymarkError`].
    ///
    /// Parameter errors convert with `?`, so handlers can read typed values
    /// directly. A failure resolves to no screen.
    pub fn register_fallible<F>(&mut self, path: impl Into<RoutePath>, handler: F)
    where
        F: Fn(RouteContext) -> Result<S, WaymarkError> + Send + Sync + 'static,
    {
        self.register(path.into().into_inner(), fallible(handler));
    }

    /// Insert the invoker for `path`, refusing to replace an existing one.
    pub fn try_register(
        &mut self,
        path: impl Into<String>,
        invoker: Invoker<S>,
    ) -> Result<(), RegistryError> {
        let path = path.into();
        if self.routes.contains_key(&path) {
            return Err(RegistryError::DuplicatePath(path));
        }
        self.register(path, invoker);
        Ok(())
    }

    /// The invoker registered for `path`, if any.
    pub fn lookup(&self, path: &str) -> Option<&Invoker<S>> {
        let found = self.routes.get(path);
        #[cfg(feature = "tracing")]
        {
            tracing::trace!(path, hit = found.is_some(), "route lookup");
        }
        found
    }

    /// Whether a handler is registered for `path`.
    pub fn contains(&self, path: &str) -> bool {
        self.routes.contains_key(path)
    }

    /// Number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Registered paths, in unspecified order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.routes.keys().map(String::as_str)
    }
}

impl<S> Default for RouteRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> std::fmt::Debug for RouteRegistry<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteRegistry")
            .field("routes", &self.routes.len())
            .finish()
    }
}

/// Builder for [`RouteRegistry`].
pub struct RegistryBuilder<S> {
    routes: Vec<(String, Invoker<S>)>,
    strict: bool,
}

impl<S> Default for RegistryBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S> RegistryBuilder<S> {
    /// Create a new builder with last-write-wins semantics.
    pub fn new() -> Self {
        Self {
            routes: Vec::new(),
            strict: false,
        }
    }

    /// Reject duplicate paths at [`build`](Self::build) time.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Add a route.
    pub fn route<F>(mut self, path: impl Into<RoutePath>, handler: F) -> Self
    where
        F: Fn(RouteContext) -> Option<S> + Send + Sync + 'static,
    {
        self.routes
            .push((path.into().into_inner(), Invoker::new(handler)));
        self
    }

    /// Add a route whose handler may fail. See [`RouteRegistry::register_fallible`].
    pub fn fallible_route<F>(mut self, path: impl Into<RoutePath>, handler: F) -> Self
    where
        F: Fn(RouteContext) -> Result<S, WaymarkError> + Send + Sync + 'static,
    {
        self.routes.push((path.into().into_inner(), fallible(handler)));
        self
    }

    /// Add a route from an existing invoker.
    pub fn invoker(mut self, path: impl Into<String>, invoker: Invoker<S>) -> Self {
        self.routes.push((path.into(), invoker));
        self
    }

    /// Build the registry.
    ///
    /// In strict mode the first duplicated path is reported as
    /// [`RegistryError::DuplicatePath`].
    pub fn build(self) -> Result<RouteRegistry<S>, RegistryError> {
        let mut registry = RouteRegistry::new();
        for (path, invoker) in self.routes {
            if self.strict {
                registry.try_register(path, invoker)?;
            } else {
                registry.register(path, invoker);
            }
        }
        Ok(registry)
    }
}
