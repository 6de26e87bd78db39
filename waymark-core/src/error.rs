//! Error types for Waymark.
//!
//! Navigation itself never fails with an error: an unroutable target, a handler that
//! declines, or a tree without a suitable container all surface as absence
//! (`None` / `false`). The types here cover the ambient edges around it:
//!
//! - [`WaymarkError`] - Top-level error type
//! - [`RegistryError`] - Strict registration errors
//! - [`ParamError`] - Typed parameter extraction errors

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Top-level error type for all Waymark operations that can fail.
#[derive(Error, Debug)]
pub enum WaymarkError {
    /// An error occurred while registering a route.
    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),

    /// A route parameter could not be extracted.
    #[error("parameter error: {0}")]
    Param(#[from] ParamError),

    /// A custom error occurred.
    #[error(transparent)]
    Custom(BoxError),
}

/// Errors raised by strict registration.
///
/// The default registration path overwrites silently and never produces these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A handler is already registered under this path.
    #[error("route already registered for path: {0:?}")]
    DuplicatePath(String),
}

/// Errors raised when reading a typed value out of route parameters.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    /// No parameter with this name was supplied.
    #[error("missing parameter `{0}`")]
    Missing(String),

    /// The parameter exists but holds a different kind of value.
    #[error("parameter `{name}` is {found}, expected {expected}")]
    TypeMismatch {
        /// Parameter name.
        name: String,
        /// Kind the caller asked for.
        expected: &'static str,
        /// Kind actually stored.
        found: &'static str,
    },
}

impl From<BoxError> for WaymarkError {
    fn from(err: BoxError) -> Self {
        WaymarkError::Custom(err)
    }
}

#[cfg(test)]
mod tests {
    use super::{BoxError, ParamError, WaymarkError};
    use crate::context::RouteContext;
    use crate::params::Params;

    fn read_id(ctx: &RouteContext) -> Result<i64, WaymarkError> {
        Ok(ctx.get("id")?)
    }

    #[test]
    fn test_param_error_converts() {
        let err = read_id(&RouteContext::new("user", Params::new())).unwrap_err();
        assert!(matches!(err, WaymarkError::Param(ParamError::Missing(ref n)) if n == "id"));
        assert_eq!(err.to_string(), "parameter error: missing parameter `id`");
    }

    #[test]
    fn test_custom_error_is_transparent() {
        let err = WaymarkError::from(BoxError::from("disk full"));
        assert!(matches!(err, WaymarkError::Custom(_)));
        assert_eq!(err.to_string(), "disk full");
    }
}
