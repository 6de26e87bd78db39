//! Routable targets.

use crate::params::{ParamValue, Params};
use crate::path::RoutePath;

/// Anything that can be navigated to by path.
///
/// Targets are short-lived values built by the caller for a single navigation
/// attempt; they hold no reference to the registry that resolves them.
///
/// # Example
///
/// ```rust,ignore
/// struct Profile { id: i64 }
///
/// impl RoutableTarget for Profile {
///     fn path(&self) -> RoutePath {
///         RoutePath::new("user/profile")
///     }
///
///     fn parameters(&self) -> Option<Params> {
///         Some(params! { "id" => self.id })
///     }
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a routable target",
    label = "missing `RoutableTarget` implementation",
    note = "Implement `RoutableTarget` or use `#[derive(Routable)]`."
)]
pub trait RoutableTarget {
    /// The path the target resolves through.
    fn path(&self) -> RoutePath;

    /// Parameters to hand to the handler. `None` is treated as an empty mapping.
    fn parameters(&self) -> Option<Params> {
        None
    }
}

impl<T: RoutableTarget + ?Sized> RoutableTarget for &T {
    fn path(&self) -> RoutePath {
        (**self).path()
    }

    fn parameters(&self) -> Option<Params> {
        (**self).parameters()
    }
}

impl<T: RoutableTarget + ?Sized> RoutableTarget for Box<T> {
    fn path(&self) -> RoutePath {
        (**self).path()
    }

    fn parameters(&self) -> Option<Params> {
        (**self).parameters()
    }
}

/// A general-purpose target: a path plus optional parameters.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    path: RoutePath,
    parameters: Option<Params>,
}

impl Route {
    /// A target for `path` with no parameters.
    pub fn new(path: impl Into<RoutePath>) -> Self {
        Self {
            path: path.into(),
            parameters: None,
        }
    }

    /// Attach a full parameter mapping.
    pub fn with_params(mut self, parameters: Params) -> Self {
        self.parameters = Some(parameters);
        self
    }

    /// Add a single parameter.
    pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.parameters
            .get_or_insert_with(Params::new)
            .insert(name, value);
        self
    }
}

impl RoutableTarget for Route {
    fn path(&self) -> RoutePath {
        self.path.clone()
    }

    fn parameters(&self) -> Option<Params> {
        self.parameters.clone()
    }
}

impl RoutableTarget for RoutePath {
    fn path(&self) -> RoutePath {
        self.clone()
    }
}
