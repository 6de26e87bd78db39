//! Distributed route registration via `inventory`.
//!
//! Feature modules can make a destination reachable without a central list:
//! each one submits its handler, and the application assembles a registry from
//! everything linked into the binary.
//!
//! Every call to the generated constructors builds a fresh [`RouteRegistry`],
//! so tests still get isolated instances.
//!
//! # Example
//! ```rust,ignore
//! waymark_std::define_route_table!(pub AppRoutes, Screen);
//!
//! // Anywhere in the crate:
//! waymark_std::submit_route!(AppRoutes, "user/profile", |ctx| Some(Screen::profile(ctx)));
//!
//! let registry = AppRoutes::registry();
//! ```
//!
//! [`RouteRegistry`]: crate::registry::RouteRegistry

/// Declares a route table type collecting submissions for screens of type `$screen`.
///
/// The generated type offers `registry()`, which applies submissions in link
/// order with last-write-wins, and `registry_strict()`, which reports the first
/// duplicated path instead.
#[macro_export]
macro_rules! define_route_table {
    ($vis:vis $table:ident, $screen:ty) => {
        #[doc = concat!("Route submissions collected for `", stringify!($screen), "` screens.")]
        $vis struct $table {
            path: &'static str,
            handler: fn($crate::waymark_core::RouteContext) -> ::core::option::Option<$screen>,
        }

        impl $table {
            /// Create a submission. Used by `submit_route!`.
            pub const fn new(
                path: &'static str,
                handler: fn($crate::waymark_core::RouteContext) -> ::core::option::Option<$screen>,
            ) -> Self {
                Self { path, handler }
            }

            /// Build a registry from every submitted route.
            pub fn registry() -> $crate::registry::RouteRegistry<$screen> {
                let mut registry = $crate::registry::RouteRegistry::new();
                for entry in $crate::inventory::iter::<$table> {
                    let invoker = $crate::waymark_core::Invoker::new(entry.handler);
                    registry.register(entry.path, invoker);
                }
                registry
            }

            /// Build a registry, failing on the first path submitted twice.
            pub fn registry_strict() -> ::core::result::Result<
                $crate::registry::RouteRegistry<$screen>,
                $crate::waymark_core::RegistryError,
            > {
                let mut registry = $crate::registry::RouteRegistry::new();
                for entry in $crate::inventory::iter::<$table> {
                    let invoker = $crate::waymark_core::Invoker::new(entry.handler);
                    registry.try_register(entry.path, invoker)?;
                }
                ::core::result::Result::Ok(registry)
            }
        }

        $crate::inventory::collect!($table);
    };
}

/// Submits a route to a table declared with [`define_route_table!`].
///
/// The handler must be a non-capturing closure or a function item.
#[macro_export]
macro_rules! submit_route {
    ($table:ty, $path:expr, $handler:expr) => {
        $crate::inventory::submit! {
            <$table>::new($path, $handler)
        }
    };
}
