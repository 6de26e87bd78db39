//! Procedural macros for Waymark.
//!
//! - `#[derive(Routable)]` - implements `RoutableTarget` from a type-level
//!   `#[route(path = "...")]` attribute and the struct's fields.

use proc_macro::TokenStream;

mod routable;

/// Derive macro for implementing `RoutableTarget`.
///
/// ```rust,ignore
/// #[derive(Clone, Routable)]
/// #[route(path = "user/profile")]
/// struct Profile {
///     id: i64,
///     #[route(rename = "tab")]
///     initial_tab: String,
///     #[route(skip)]
///     source: Source,
/// }
/// ```
///
/// Every included field must be `Clone` and convert into `ParamValue`. A struct
/// with no included fields reports no parameters.
#[proc_macro_derive(Routable, attributes(route))]
pub fn derive_routable(input: TokenStream) -> TokenStream {
    routable::derive_routable_impl(input)
}
